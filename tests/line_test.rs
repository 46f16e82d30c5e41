#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use planar2::geometry::geo_traits::Linear;
    use planar2::geometry::primitives::{Line, Point, Ray, Segment, angle, orthogonal, parallel};
    use planar2::util::eq;

    #[test]
    fn test_degenerate_line_is_rejected() {
        assert!(Line::new(Point(1.0, 1.0), Point(1.0, 1.0)).is_err());
        assert!(Line::from_coefficients(0.0, 0.0, 5.0).is_err());
        assert!(Segment::new(Point(0.0, 0.0), Point(0.0, 0.0)).is_err());
        assert!(Ray::new(Point(2.0, 3.0), Point(2.0, 3.0)).is_err());
    }

    #[test_case(1.0, -1.0, 0.0; "diagonal")]
    #[test_case(0.0, 2.0, -3.0; "horizontal")]
    #[test_case(5.0, 0.0, 10.0; "vertical")]
    fn test_line_from_coefficients(a: f64, b: f64, c: f64) {
        let l = Line::from_coefficients(a, b, c).unwrap();
        //both defining points satisfy a*x + b*y + c = 0
        for p in [l.a, l.b] {
            assert!(eq(a * p.x() + b * p.y() + c, 0.0));
        }
    }

    #[test]
    fn test_line_from_point_and_angle() {
        let l = Line::from_point_and_angle(Point(1.0, 1.0), FRAC_PI_4);
        assert!(l.on_line(&Point(3.0, 3.0)));
        assert!(l.on_line(&Point(-2.0, -2.0)));
        assert!(!l.on_line(&Point(1.0, 2.0)));
    }

    #[test]
    fn test_on_line_accepts_any_collinear_point() {
        let l = Line::new(Point(0.0, 0.0), Point(2.0, 1.0)).unwrap();
        assert!(l.on_line(&Point(4.0, 2.0)));
        assert!(l.on_line(&Point(-2.0, -1.0)));
        assert!(l.on_line(&Point(1.0, 0.5)));
        assert!(!l.on_line(&Point(1.0, 1.5)));
    }

    #[test]
    fn test_segment_membership_is_bounded() {
        let s = Segment::new(Point(0.0, 0.0), Point(2.0, 0.0)).unwrap();
        assert!(s.on_object(&Point(1.0, 0.0)));
        assert!(s.on_object(&Point(0.0, 0.0)));
        assert!(s.on_object(&Point(2.0, 0.0)));
        assert!(!s.on_object(&Point(3.0, 0.0)));
        assert!(!s.on_object(&Point(-1.0, 0.0)));
        assert!(!s.on_object(&Point(1.0, 0.1)));
    }

    #[test]
    fn test_ray_membership_is_half_bounded() {
        let r = Ray::new(Point(0.0, 0.0), Point(1.0, 0.0)).unwrap();
        assert!(r.on_object(&Point(0.0, 0.0)));
        assert!(r.on_object(&Point(0.5, 0.0)));
        assert!(r.on_object(&Point(100.0, 0.0)));
        assert!(!r.on_object(&Point(-0.5, 0.0)));
        assert!(!r.on_object(&Point(1.0, 1.0)));
    }

    #[test]
    fn test_direction_is_unit_length() {
        let s = Segment::new(Point(1.0, 1.0), Point(4.0, 5.0)).unwrap();
        let d = s.direction();
        assert!(eq(d.abs(), 1.0));
        assert_eq!(d, Point(0.6, 0.8));
    }

    #[test]
    fn test_projection_lands_on_the_line() {
        let l = Line::new(Point(0.0, 0.0), Point(3.0, 4.0)).unwrap();
        let p = Point(2.0, 5.0);
        let proj = l.projection(&p);
        assert!(l.on_line(&proj));
        //projection is orthogonal to the carrier
        assert!(eq((p - proj).dot(&(l.b - l.a)), 0.0));
        assert_eq!(proj, Point(3.12, 4.16));
    }

    #[test]
    fn test_reflection_is_an_involution() {
        let mut rng = SmallRng::seed_from_u64(0);
        let l = Line::new(Point(-1.0, 2.0), Point(3.0, -0.5)).unwrap();
        for _ in 0..100 {
            let p = Point(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            assert_eq!(l.reflection(&l.reflection(&p)), p);
        }
    }

    #[test]
    fn test_reflection_fixture() {
        let l = Line::new(Point(0.0, 0.0), Point(1.0, 0.0)).unwrap();
        assert_eq!(l.reflection(&Point(2.0, 3.0)), Point(2.0, -3.0));
    }

    #[test]
    fn test_parallel_and_orthogonal() {
        let l1 = Line::new(Point(0.0, 0.0), Point(2.0, 1.0)).unwrap();
        let l2 = Line::new(Point(0.0, 5.0), Point(4.0, 7.0)).unwrap();
        let l3 = Line::new(Point(0.0, 0.0), Point(-1.0, 2.0)).unwrap();
        assert!(parallel(&l1, &l2));
        assert!(!parallel(&l1, &l3));
        assert!(orthogonal(&l1, &l3));
        assert!(!orthogonal(&l1, &l2));
    }

    #[test]
    fn test_angle_is_folded_into_first_quadrant() {
        let horizontal = Line::new(Point(0.0, 0.0), Point(1.0, 0.0)).unwrap();
        let vertical = Line::new(Point(0.0, 0.0), Point(0.0, 1.0)).unwrap();
        let diagonal = Line::new(Point(0.0, 0.0), Point(1.0, 1.0)).unwrap();
        assert!(eq(angle(&horizontal, &vertical), FRAC_PI_2));
        assert!(eq(angle(&horizontal, &diagonal), FRAC_PI_4));
        //direction reversal does not change the angle between lines
        let reversed = Line::new(Point(1.0, 1.0), Point(0.0, 0.0)).unwrap();
        assert!(eq(angle(&horizontal, &reversed), FRAC_PI_4));
        //near-degenerate angles survive the acos/asin switch
        let shallow = Line::from_point_and_angle(Point(0.0, 0.0), 1e-8);
        assert!(eq(angle(&horizontal, &shallow), 1e-8));
    }

    #[test]
    fn test_slope_and_axis_alignment() {
        let s = Segment::new(Point(0.0, 0.0), Point(2.0, 1.0)).unwrap();
        assert!(eq(s.slope(), 0.5));
        assert!(!s.is_horizontal() && !s.is_vertical());

        let h = Segment::new(Point(0.0, 3.0), Point(5.0, 3.0)).unwrap();
        assert!(h.is_horizontal());
        assert!(eq(h.slope(), 0.0));

        let v = Segment::new(Point(2.0, 0.0), Point(2.0, 8.0)).unwrap();
        assert!(v.is_vertical());
        assert!(v.slope().is_infinite());
    }

    #[test]
    fn test_segment_accessors() {
        let s = Segment::from_point_angle_length(Point(1.0, 2.0), 0.0, 3.0).unwrap();
        assert_eq!(s.end_points(), (Point(1.0, 2.0), Point(4.0, 2.0)));
        assert!(eq(s.x1(), 1.0));
        assert!(eq(s.y1(), 2.0));
        assert!(eq(s.x2(), 4.0));
        assert!(eq(s.y2(), 2.0));
        assert!(eq(s.dx(), 3.0));
        assert!(eq(s.dy(), 0.0));
        assert!(eq(s.length(), 3.0));
        assert_eq!(s.mid_point(), Point(2.5, 2.0));
    }

    #[test]
    fn test_segment_translation_and_rotation() {
        let s = Segment::new(Point(0.0, 0.0), Point(2.0, 0.0)).unwrap();
        assert_eq!(
            s.translated(Point(1.0, -1.0)).end_points(),
            (Point(1.0, -1.0), Point(3.0, -1.0))
        );
        assert_eq!(s.move_x(2.0).end_points(), (Point(2.0, 0.0), Point(4.0, 0.0)));
        assert_eq!(s.move_y(-3.0).end_points(), (Point(0.0, -3.0), Point(2.0, -3.0)));
        //move_v shifts a quarter turn counter-clockwise from the direction
        assert_eq!(s.move_v(1.0).end_points(), (Point(0.0, 1.0), Point(2.0, 1.0)));
        assert_eq!(s.rotated(FRAC_PI_2).end_points(), (Point(0.0, 0.0), Point(0.0, 2.0)));
        assert_eq!(s.rotated(PI).end_points(), (Point(0.0, 0.0), Point(-2.0, 0.0)));
    }

    #[test]
    fn test_ray_accessors_and_moves() {
        let r = Ray::from_point_and_angle(Point(1.0, 1.0), FRAC_PI_2);
        assert_eq!(r.source(), Point(1.0, 1.0));
        assert!(eq(r.x(), 1.0));
        assert!(eq(r.y(), 1.0));
        assert!(r.on_object(&Point(1.0, 5.0)));
        assert!(!r.on_object(&Point(1.0, 0.0)));

        let shifted = r.move_x(2.0);
        assert_eq!(shifted.source(), Point(3.0, 1.0));
        //rotating a quarter turn makes the upward ray point left
        let rotated = r.rotated(FRAC_PI_2);
        assert!(rotated.on_object(&Point(-4.0, 1.0)));
    }
}
