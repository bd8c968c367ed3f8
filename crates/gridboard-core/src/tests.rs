#[cfg(test)]
mod tests {
    use crate::*;

    // ── Pixel parsing ───────────────────────────

    #[test]
    fn parse_px_reads_plain_pixels() {
        assert_eq!(parse_px("28px"), 28.0);
        assert_eq!(parse_px(" 16px "), 16.0);
        assert_eq!(parse_px("0"), 0.0);
    }

    #[test]
    fn parse_px_keeps_fractions() {
        assert_eq!(parse_px("12.5px"), 12.5);
    }

    #[test]
    fn parse_px_defaults_to_zero() {
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("-4px"), 0.0);
        assert_eq!(parse_px("NaN"), 0.0);
        assert_eq!(parse_px("infpx"), 0.0);
    }

    #[test]
    fn padding_from_css() {
        let padding = Padding::from_css("28px", "10px", "bogus", "4px");
        assert_eq!(padding, Padding::new(28.0, 10.0, 0.0, 4.0));
    }

    #[test]
    fn rect_inset_gives_content_box() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        let content = rect.inset(Padding::new(5.0, 10.0, 15.0, 20.0));
        assert_eq!(content, Rect::new(30.0, 25.0, 170.0, 80.0));
    }

    // ── Position ────────────────────────────────

    #[test]
    fn position_spans() {
        let p = Position::new(2, 3, 4, 5);
        assert_eq!(p.row_span(), 1);
        assert_eq!(p.col_span(), 1);
    }

    #[test]
    fn position_from_slice_needs_four() {
        assert_eq!(Position::from_slice(&[1, 2, 3, 4]), Some(Position::new(1, 2, 3, 4)));
        assert_eq!(Position::from_slice(&[1, 2, 3]), None);
        assert_eq!(Position::from_slice(&[1, 2, 3, 4, 5]), None);
        assert_eq!(Position::from_slice(&[]), None);
    }

    #[test]
    fn item_serializes_with_key_and_array() {
        let item = Item::new("4", Position::new(2, 3, 4, 5));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"_key":"4","position":[2,3,4,5]}"#);

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    // ── Grid areas ──────────────────────────────

    #[test]
    fn grid_area_uses_one_based_exclusive_lines() {
        let area = GridArea::for_item(Position::new(0, 0, 0, 8), 0);
        assert_eq!(area.row, GridLines { start: 1, end: 2 });
        assert_eq!(area.column, GridLines { start: 1, end: 10 });
        assert_eq!(area.z_index, 1);
        assert_eq!(area.row_units, 1);
    }

    #[test]
    fn grid_area_row_units_follow_span() {
        let area = GridArea::for_item(Position::new(2, 3, 4, 5), 3);
        assert_eq!(area.row, GridLines { start: 3, end: 5 });
        assert_eq!(area.z_index, 4);
        assert_eq!(area.row_units, 2);
    }

    #[test]
    fn spans_saturate_instead_of_overflowing() {
        let wide = Position::new(0, 0, -2_000_000_000, 2_000_000_000);
        assert_eq!(wide.col_span(), i32::MAX);

        let tall = Position::new(i32::MIN, i32::MAX, 0, 0);
        assert_eq!(tall.row_span(), i32::MAX);
    }

    #[test]
    fn grid_area_saturates_at_the_top_of_the_range() {
        let area = GridArea::for_item(Position::new(0, i32::MAX, 0, i32::MAX - 1), usize::MAX);
        assert_eq!(area.row, GridLines { start: 1, end: i32::MAX });
        assert_eq!(area.column, GridLines { start: 1, end: i32::MAX });
        assert_eq!(area.z_index, usize::MAX);
        assert_eq!(area.row_units, i32::MAX);
    }

    // ── Payload ─────────────────────────────────

    #[test]
    fn payload_from_card_mime() {
        assert_eq!(
            DragPayload::from_data(CARD_MIME, "3"),
            Some(DragPayload::card("3"))
        );
    }

    #[test]
    fn payload_rejects_other_mime_or_empty_key() {
        assert_eq!(DragPayload::from_data("text/plain", "3"), None);
        assert_eq!(DragPayload::from_data(CARD_MIME, ""), None);
    }

    #[test]
    fn payload_description() {
        assert_eq!(DragPayload::card("2").description(), "Moving item: 2");
    }

    #[test]
    fn fixed_geometry_unmeasured_has_no_rect() {
        let geometry = FixedGeometry::unmeasured();
        assert!(geometry.rect().is_none());
        assert_eq!(geometry.padding(), Padding::ZERO);
    }
}
