//! Unit tests for pax-cabin.

use crate::{CabinError, CabinLayout, SeatSide, SideCorrection};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod dimensions {
    use super::*;

    #[test]
    fn single_aisle_defaults() {
        let cabin = CabinLayout::default();
        assert_eq!(cabin.row_count(), 30);
        assert_eq!(cabin.seats_per_row(), 6);
        assert_eq!(cabin.capacity(), 180);
        assert_eq!(cabin.midpoint(), 3);
    }

    #[test]
    fn sides_split_at_midpoint() {
        let cabin = CabinLayout::default();
        assert_eq!(cabin.side(0), SeatSide::Near);
        assert_eq!(cabin.side(2), SeatSide::Near);
        assert_eq!(cabin.side(3), SeatSide::Far);
        assert_eq!(cabin.side(5), SeatSide::Far);
    }

    #[test]
    fn row_offsets_non_decreasing() {
        let cabin = CabinLayout::default();
        assert!(cabin.row_offsets().windows(2).all(|w| w[0] <= w[1]));
    }
}

#[cfg(test)]
mod positions {
    use super::*;

    #[test]
    fn front_row_window_seats() {
        let cabin = CabinLayout::default();
        let a = cabin.position_for(0, 0).unwrap();
        assert!(close(a.x, 251.1) && close(a.y, 103.4), "got {a}");
        let f = cabin.position_for(0, 5).unwrap();
        assert!(close(f.x, 297.2) && close(f.y, 103.4), "got {f}");
    }

    #[test]
    fn far_side_steps_inward() {
        let cabin = CabinLayout::default();
        let d = cabin.position_for(4, 3).unwrap();
        assert!(close(d.x, 297.2 - 2.0 * 7.2), "got {d}");
    }

    #[test]
    fn exit_rows_are_narrowed() {
        let cabin = CabinLayout::default();
        let near_28 = cabin.position_for(28, 0).unwrap();
        let far_28 = cabin.position_for(28, 5).unwrap();
        assert!(close(near_28.x, 252.1), "got {near_28}");
        assert!(close(far_28.x, 296.5), "got {far_28}");

        let aisle_29 = cabin.position_for(29, 2).unwrap();
        assert!(close(aisle_29.x, 251.1 + 2.0 * 7.2 + 1.8), "got {aisle_29}");
        let far_29 = cabin.position_for(29, 5).unwrap();
        assert!(close(far_29.x, 295.7), "got {far_29}");
    }

    #[test]
    fn unaffected_row_has_no_correction() {
        let cabin = CabinLayout::default();
        assert!(close(cabin.position_for(27, 0).unwrap().x, 251.1));
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let cabin = CabinLayout::default();
        assert_eq!(
            cabin.position_for(30, 0),
            Err(CabinError::OutOfRange { row: 30, seat: 0, rows: 30, seats_per_row: 6 })
        );
        assert!(cabin.position_for(0, 6).is_err());
        assert!(cabin.travel_path(99, 0).is_err());
        assert!(cabin.travel_distance(0, 99).is_err());
    }
}

#[cfg(test)]
mod paths {
    use super::*;

    #[test]
    fn path_runs_from_entry_to_seat() {
        let cabin = CabinLayout::default();
        let path = cabin.travel_path(3, 4).unwrap();
        let start = path.start().unwrap();
        let end = path.end().unwrap();
        assert!(close(start.x, 244.0) && close(start.y, 78.0));
        assert_eq!(end, cabin.position_for(3, 4).unwrap());
        assert_eq!(path.points().len(), 6);
    }

    #[test]
    fn svg_matches_motion_path_format() {
        let cabin = CabinLayout::default();
        let svg = cabin.travel_path(0, 0).unwrap().to_svg();
        assert!(svg.starts_with("M 244 78 L 258 78 L 268 79.1 L 274 82 L 274 "), "got {svg}");
    }

    #[test]
    fn front_window_distance() {
        let cabin = CabinLayout::default();
        let d = cabin.travel_distance(0, 0).unwrap();
        assert!((d - (30.72 + 21.4 + 22.9)).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn distance_grows_with_depth() {
        let cabin = CabinLayout::default();
        for seat in 0..6 {
            let ds: Vec<f64> = (0..30).map(|r| cabin.travel_distance(r, seat).unwrap()).collect();
            assert!(ds.windows(2).all(|w| w[0] <= w[1]), "seat {seat}: {ds:?}");
        }
    }

    #[test]
    fn window_walks_further_than_aisle() {
        let cabin = CabinLayout::default();
        let window = cabin.travel_distance(10, 0).unwrap();
        let aisle = cabin.travel_distance(10, 2).unwrap();
        assert!(window > aisle);
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn custom_layout_accepted() {
        let cabin = CabinLayout::new(vec![100.0, 110.0, 120.0, 130.0], 4).unwrap();
        assert_eq!(cabin.row_count(), 4);
        assert_eq!(cabin.midpoint(), 2);
        // The last two rows still carry the default exit corrections.
        assert!(close(cabin.position_for(3, 0).unwrap().x, 251.1 + 1.8));
    }

    #[test]
    fn decreasing_offsets_rejected() {
        let err = CabinLayout::new(vec![100.0, 90.0], 6).unwrap_err();
        assert!(matches!(err, CabinError::InvalidLayout(_)));
    }

    #[test]
    fn empty_and_narrow_rejected() {
        assert!(CabinLayout::new(vec![], 6).is_err());
        assert!(CabinLayout::new(vec![100.0], 1).is_err());
        assert!(CabinLayout::new(vec![f64::NAN], 6).is_err());
    }

    #[test]
    fn too_many_corrections_rejected() {
        let c = SideCorrection { near: 0.0, far: 0.0 };
        let cabin = CabinLayout::new(vec![100.0, 110.0], 6).unwrap();
        assert!(cabin.with_exit_corrections(vec![c; 3]).is_err());
    }

    #[test]
    fn corrections_can_be_disabled() {
        let cabin = CabinLayout::default().with_exit_corrections(vec![]).unwrap();
        assert!(close(cabin.position_for(29, 0).unwrap().x, 251.1));
    }
}
