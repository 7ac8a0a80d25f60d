use knapsack_packer::packer::{format_positions, select_indices};
use knapsack_packer::parser::{parse_line, FnLimits, NoLimits};
use knapsack_packer::selector::SelectionRunner;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// (weight in hundredths, whole price) pairs.
fn items_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..=10_000, 1u32..=100), 0..9)
}

fn render_line(capacity: u32, items: &[(u32, u32)]) -> String {
    let records: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, (w, p))| format!("({},{},€{})", i + 1, Decimal::new(i64::from(*w), 2), p))
        .collect();
    format!("{} : {}", capacity, records.join(" "))
}

proptest! {
    #[test]
    fn selection_respects_capacity(capacity in 1u32..=100, items in items_strategy()) {
        let parsed = parse_line(&render_line(capacity, &items), '€', &NoLimits).unwrap();
        let selection = SelectionRunner::run(&parsed.items, parsed.capacity);
        prop_assert!(
            selection.total_weight <= parsed.capacity,
            "weight {} over capacity {}",
            selection.total_weight,
            parsed.capacity
        );
    }

    #[test]
    fn selection_follows_input_order(capacity in 1u32..=100, items in items_strategy()) {
        let parsed = parse_line(&render_line(capacity, &items), '€', &NoLimits).unwrap();
        let positions = SelectionRunner::run(&parsed.items, parsed.capacity).positions();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1], "positions not increasing: {:?}", positions);
        }
    }

    #[test]
    fn selection_beats_best_single_item(capacity in 1u32..=100, items in items_strategy()) {
        let parsed = parse_line(&render_line(capacity, &items), '€', &NoLimits).unwrap();
        let selection = SelectionRunner::run(&parsed.items, parsed.capacity);
        let best_single = parsed
            .items
            .iter()
            .filter(|i| i.weight <= parsed.capacity)
            .map(|i| i.price)
            .max()
            .unwrap_or(Decimal::ZERO);
        prop_assert!(selection.total_price >= best_single);
        prop_assert_eq!(selection.is_empty(), best_single == Decimal::ZERO);
    }

    #[test]
    fn last_choice_cannot_be_swapped_for_a_later_item(
        capacity in 1u32..=100,
        items in items_strategy(),
    ) {
        let parsed = parse_line(&render_line(capacity, &items), '€', &NoLimits).unwrap();
        let selection = SelectionRunner::run(&parsed.items, parsed.capacity);
        let chosen = selection.positions();
        if let Some(last) = selection.items.last() {
            let start = if chosen.len() > 1 { chosen[chosen.len() - 2] } else { 0 };
            for candidate in parsed.items.iter().filter(|i| i.position > start) {
                if chosen.contains(&candidate.position) {
                    continue;
                }
                let swapped = selection.total_weight - last.weight + candidate.weight;
                prop_assert!(
                    !(swapped <= parsed.capacity && candidate.price > last.price),
                    "item {} would improve on last choice {}",
                    candidate.position,
                    last.position
                );
            }
        }
    }

    #[test]
    fn failing_items_are_dropped_not_rejected(
        items in items_strategy(),
        max_weight in 1u32..=100,
        max_price in 1u32..=100,
    ) {
        let max_weight = Decimal::from(max_weight);
        let max_price = Decimal::from(max_price);
        let limits = FnLimits::new(
            |w: &Decimal| *w <= max_weight,
            |p: &Decimal| *p <= max_price,
            |_: usize| true,
        );
        let line = render_line(1, &items);
        let parsed = parse_line(&line, '€', &limits).unwrap();

        let expected = items
            .iter()
            .filter(|(w, p)| Decimal::new(i64::from(*w), 2) <= max_weight && Decimal::from(*p) <= max_price)
            .count();
        prop_assert_eq!(parsed.items.len(), expected);
        for item in &parsed.items {
            prop_assert!(item.weight <= max_weight);
            prop_assert!(item.price <= max_price);
        }
    }

    #[test]
    fn formatted_output_matches_selection(capacity in 1u32..=100, items in items_strategy()) {
        let line = render_line(capacity, &items);
        let parsed = parse_line(&line, '€', &NoLimits).unwrap();
        let selection = SelectionRunner::run(&parsed.items, parsed.capacity);
        let out = select_indices(&line, &NoLimits).unwrap();

        if selection.is_empty() {
            prop_assert_eq!(out, "-");
        } else {
            let expected: Vec<String> = selection.positions().iter().map(|p| p.to_string()).collect();
            prop_assert_eq!(out, expected.join(","));
        }
    }
}

#[test]
fn empty_selection_formats_as_dash() {
    assert_eq!(format_positions(&[]), "-");
}
