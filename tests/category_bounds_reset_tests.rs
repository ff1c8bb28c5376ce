use indexmap::IndexSet;
use valuemap_rs::api::{FilterEngine, FilterEngineConfig};
use valuemap_rs::core::{FilterMode, Parcel, ParcelId, ValueField};

fn parcel(id: u64, land_use: Option<&str>, capital: f64, land: f64, improvements: f64) -> Parcel {
    Parcel::new(
        ParcelId::new(id),
        format!("{id} Example Street"),
        capital,
        land,
        improvements,
        land_use.map(str::to_owned),
    )
    .expect("valid parcel")
}

fn loaded_engine() -> FilterEngine {
    let mut engine = FilterEngine::new(FilterEngineConfig::new()).expect("engine init");
    engine.on_data_loaded(vec![
        parcel(1, Some("Residential"), 100_000.0, 70_000.0, 30_000.0),
        parcel(2, Some("Residential"), 200_000.0, 120_000.0, 80_000.0),
        parcel(3, Some("Commercial"), 300_000.0, 180_000.0, 120_000.0),
        parcel(4, Some("Commercial"), 500_000.0, 260_000.0, 240_000.0),
        parcel(5, None, 9_000_000.0, 5_000_000.0, 4_000_000.0),
    ]);
    engine
}

#[test]
fn loading_selects_every_land_use_and_spans_all_categorized_parcels() {
    let engine = loaded_engine();
    assert_eq!(engine.parcels().len(), 5);

    let known = engine.land_uses();
    assert_eq!(known.len(), 2);

    let selected = engine.state().selected_land_uses();
    assert_eq!(selected, &known);
    assert!(selected.contains("Residential"));
    assert!(selected.contains("Commercial"));

    // The uncategorized parcel never contributes to bounds.
    let bounds = engine.bounds();
    assert_eq!(bounds.capital.min, 100_000.0);
    assert_eq!(bounds.capital.max, 500_000.0);
    assert_eq!(engine.visible_len(), 4);
}

#[test]
fn widening_the_selection_recomputes_bounds_over_the_union_and_resets_ranges() {
    let mut engine = loaded_engine();

    engine
        .select_only_land_use("Residential", 0.0)
        .expect("narrow selection");
    let bounds = engine.bounds();
    assert_eq!(bounds.capital.min, 100_000.0);
    assert_eq!(bounds.capital.max, 200_000.0);
    assert_eq!(bounds.land.min, 70_000.0);
    assert_eq!(bounds.land.max, 120_000.0);

    // Narrow a range, then widen the selection: the narrowing is abandoned.
    engine
        .on_value_edit(ValueField::Capital, 150_000.0, 180_000.0, 1.0)
        .expect("capital edit");
    assert_eq!(engine.mode(), FilterMode::Total);

    let mut selection = IndexSet::new();
    selection.insert("Residential".to_owned());
    selection.insert("Commercial".to_owned());
    engine
        .set_selected_land_uses(selection, 2.0)
        .expect("widen selection");

    let bounds = engine.bounds();
    assert_eq!(bounds.capital.min, 100_000.0);
    assert_eq!(bounds.capital.max, 500_000.0);
    assert_eq!(bounds.improvements.min, 30_000.0);
    assert_eq!(bounds.improvements.max, 240_000.0);

    assert_eq!(engine.live_ranges().capital.low, 100_000.0);
    assert_eq!(engine.live_ranges().capital.high, 500_000.0);
    assert_eq!(engine.committed_ranges(), engine.live_ranges());
    assert_eq!(engine.mode(), FilterMode::Components);
}

#[test]
fn deselecting_everything_collapses_bounds_to_zero() {
    let mut engine = loaded_engine();

    engine
        .clear_land_use_selection(0.0)
        .expect("clear selection");

    let bounds = engine.bounds();
    for field in ValueField::ALL {
        assert_eq!(bounds.get(field).min, 0.0);
        assert_eq!(bounds.get(field).max, 0.0);
    }

    assert!(engine.on_tick(0.05).expect("commit"));
    assert_eq!(engine.visible_len(), 0);
}

#[test]
fn select_all_restores_the_full_selection() {
    let mut engine = loaded_engine();

    engine
        .clear_land_use_selection(0.0)
        .expect("clear selection");
    engine.select_all_land_uses(1.0).expect("select all");
    assert!(engine.on_tick(1.1).expect("commit"));

    assert_eq!(engine.selected_land_uses().len(), 2);
    assert_eq!(engine.visible_len(), 4);
}

#[test]
fn toggling_adds_unknown_and_removes_known_land_uses() {
    let mut engine = loaded_engine();

    engine
        .toggle_land_use("Commercial", 0.0)
        .expect("remove commercial");
    assert!(!engine.selected_land_uses().contains("Commercial"));
    assert_eq!(engine.bounds().capital.max, 200_000.0);

    engine
        .toggle_land_use("Commercial", 1.0)
        .expect("re-add commercial");
    assert!(engine.selected_land_uses().contains("Commercial"));
    assert_eq!(engine.bounds().capital.max, 500_000.0);
}

#[test]
fn an_empty_engine_stays_in_the_permissive_empty_state() {
    let engine = FilterEngine::new(FilterEngineConfig::new()).expect("engine init");

    assert!(engine.selected_land_uses().is_empty());
    assert_eq!(engine.bounds().capital.min, 0.0);
    assert_eq!(engine.bounds().capital.max, 0.0);
    assert_eq!(engine.visible_len(), 0);
}
