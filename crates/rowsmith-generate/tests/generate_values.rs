use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use rowsmith_core::{Column, ColumnSpec, Schema};
use rowsmith_generate::{DataGenerator, GeneratedValue, GenerationError, GeneratorConfig};

const TRIALS: usize = 1000;

fn generator(columns: Vec<ColumnSpec>, config: GeneratorConfig) -> DataGenerator {
    let schema = Schema::new(columns).expect("valid schema");
    DataGenerator::new(schema, config).expect("create generator")
}

fn column(spec: ColumnSpec) -> Column {
    Column::try_from(spec).expect("valid column")
}

fn every_type(nullable: bool) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("i", "int").nullable(nullable),
        ColumnSpec::new("l", "long").with_bounds(-5, 5).nullable(nullable),
        ColumnSpec::new("f", "float").nullable(nullable),
        ColumnSpec::new("d", "double").with_bounds(0, 1).nullable(nullable),
        ColumnSpec::new("day", "date").nullable(nullable),
        ColumnSpec::new("at", "datetime").nullable(nullable),
        ColumnSpec::new("flag", "boolean").nullable(nullable),
        ColumnSpec::new("text", "character").nullable(nullable),
        ColumnSpec::new("pick", "character")
            .with_enum(["a", "b"])
            .nullable(nullable),
    ]
}

#[test]
fn non_nullable_columns_never_null() {
    let config = GeneratorConfig::default()
        .with_seed(1)
        .with_null_probability(1.0);
    let mut generator = generator(every_type(false), config);

    for _ in 0..TRIALS {
        let row = generator.generate_row().expect("generate row");
        for (name, value) in row.iter() {
            assert!(!value.is_null(), "column {name} produced null");
        }
    }
}

#[test]
fn nullable_columns_are_all_null_at_probability_one() {
    let config = GeneratorConfig::default()
        .with_seed(2)
        .with_null_probability(1.0);
    let mut generator = generator(every_type(true), config);

    for _ in 0..100 {
        let row = generator.generate_row().expect("generate row");
        assert!(row.values().all(GeneratedValue::is_null));
    }
}

#[test]
fn nullable_columns_never_null_at_probability_zero() {
    let config = GeneratorConfig::default()
        .with_seed(3)
        .with_null_probability(0.0);
    let mut generator = generator(every_type(true), config);

    for _ in 0..100 {
        let row = generator.generate_row().expect("generate row");
        assert!(!row.values().any(GeneratedValue::is_null));
    }
}

#[test]
fn small_int_range_is_inclusive_and_fully_covered() {
    let config = GeneratorConfig::default().with_seed(4);
    let mut generator = generator(
        vec![ColumnSpec::new("n", "int").with_bounds(0, 2)],
        config,
    );

    let mut seen = BTreeSet::new();
    for _ in 0..TRIALS {
        let row = generator.generate_row().expect("generate row");
        let value = row.get("n").and_then(GeneratedValue::as_i64).expect("int value");
        assert!((0..=2).contains(&value));
        seen.insert(value);
    }
    assert_eq!(seen, BTreeSet::from([0, 1, 2]));
}

#[test]
fn numeric_values_respect_bounds_and_defaults() {
    let config = GeneratorConfig::default().with_seed(5);
    let mut generator = generator(
        vec![
            ColumnSpec::new("bounded_int", "int").with_bounds(10, 20),
            ColumnSpec::new("default_int", "long"),
            ColumnSpec::new("bounded_float", "float").with_bounds(0, 2),
            ColumnSpec::new("default_float", "double"),
        ],
        config,
    );

    for _ in 0..TRIALS {
        let row = generator.generate_row().expect("generate row");

        let value = row.get("bounded_int").and_then(GeneratedValue::as_i64);
        assert!(matches!(value, Some(v) if (10..=20).contains(&v)));

        let value = row.get("default_int").and_then(GeneratedValue::as_i64);
        assert!(matches!(value, Some(v) if (-1000..=1000).contains(&v)));

        match row.get("bounded_float") {
            Some(GeneratedValue::Float(v)) => assert!((0.0..=2.0).contains(v)),
            other => panic!("expected float, got {other:?}"),
        }
        let value = row.get("default_float").and_then(GeneratedValue::as_f64);
        assert!(matches!(value, Some(v) if (-1000.0..=1000.0).contains(&v)));

        let widened = row.get("bounded_int").and_then(GeneratedValue::as_f64);
        assert!(matches!(widened, Some(v) if v.fract() == 0.0 && (10.0..=20.0).contains(&v)));
    }
}

#[test]
fn custom_default_bounds_apply() {
    let config = GeneratorConfig::default()
        .with_seed(6)
        .with_default_bounds(100, 105);
    let mut generator = generator(vec![ColumnSpec::new("n", "int")], config);

    for _ in 0..200 {
        let value = generator
            .generate_row()
            .expect("generate row")
            .get("n")
            .and_then(GeneratedValue::as_i64);
        assert!(matches!(value, Some(v) if (100..=105).contains(&v)));
    }
}

#[test]
fn column_bound_conflicting_with_default_fails() {
    let config = GeneratorConfig::default().with_seed(7);
    let mut generator = generator(
        vec![ColumnSpec {
            minimum: Some(5000.into()),
            ..ColumnSpec::new("n", "int")
        }],
        config,
    );

    let result = generator.generate_row();
    assert!(matches!(
        result,
        Err(GenerationError::InvalidBounds { ref column, .. }) if column == "n"
    ));
}

#[test]
fn enum_values_come_from_the_list() {
    let config = GeneratorConfig::default().with_seed(8);
    let mut generator = generator(
        vec![
            ColumnSpec::new("letter", "character").with_enum(["a", "b", "c"]),
            ColumnSpec::new("code", "int").with_enum([7, 11]),
        ],
        config,
    );

    let mut letters = BTreeSet::new();
    for _ in 0..TRIALS {
        let row = generator.generate_row().expect("generate row");
        let letter = row
            .get("letter")
            .and_then(GeneratedValue::as_str)
            .expect("text enum value")
            .to_string();
        assert!(["a", "b", "c"].contains(&letter.as_str()));
        letters.insert(letter);

        let code = row.get("code").and_then(GeneratedValue::as_i64);
        assert!(matches!(code, Some(7) | Some(11)));
    }
    assert_eq!(letters.len(), 3);
}

#[test]
fn temporal_values_parse_under_their_formats() {
    let config = GeneratorConfig::default().with_seed(9);
    let window = (config.earliest, config.latest);
    let mut generator = generator(
        vec![
            ColumnSpec::new("at", "datetime"),
            ColumnSpec::new("day", "date"),
            ColumnSpec::new("uk_day", "date").with_format("%d/%m/%Y"),
        ],
        config,
    );

    for _ in 0..TRIALS {
        let row = generator.generate_row().expect("generate row");

        let at = row.get("at").and_then(GeneratedValue::as_str).expect("datetime");
        let at = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M:%S").expect("parse datetime");
        assert!(at >= window.0 && at <= window.1);

        let day = row.get("day").and_then(GeneratedValue::as_str).expect("date");
        NaiveDate::parse_from_str(day, "%Y-%m-%d").expect("parse date");

        let uk_day = row.get("uk_day").and_then(GeneratedValue::as_str).expect("date");
        NaiveDate::parse_from_str(uk_day, "%d/%m/%Y").expect("parse custom date");
    }
}

#[test]
fn temporal_path_draws_null_twice_unless_disabled() {
    let columns = || vec![ColumnSpec::new("day", "date").nullable(true)];
    let trials = 4000;

    let count_nulls = |redraw: bool| {
        let mut config = GeneratorConfig::default()
            .with_seed(10)
            .with_null_probability(0.5);
        config.redraw_temporal_nulls = redraw;
        let mut generator = generator(columns(), config);
        (0..trials)
            .filter(|_| {
                generator
                    .generate_row()
                    .expect("generate row")
                    .get("day")
                    .is_some_and(GeneratedValue::is_null)
            })
            .count() as f64
            / trials as f64
    };

    let redrawn = count_nulls(true);
    let single = count_nulls(false);
    assert!(redrawn > 0.68 && redrawn < 0.82, "redrawn null rate {redrawn}");
    assert!(single > 0.43 && single < 0.57, "single null rate {single}");
}

#[test]
fn null_draw_is_consumed_for_non_nullable_columns() {
    let values = |nullable: bool, probability: f64| {
        let config = GeneratorConfig::default()
            .with_seed(11)
            .with_null_probability(probability);
        let mut generator = generator(
            vec![ColumnSpec::new("n", "int").nullable(nullable)],
            config,
        );
        (0..50)
            .map(|_| generator.generate_row().expect("generate row"))
            .collect::<Vec<_>>()
    };

    assert_eq!(values(false, 0.9), values(true, 0.0));
}

#[test]
fn booleans_take_both_values() {
    let config = GeneratorConfig::default().with_seed(12);
    let mut generator = generator(vec![ColumnSpec::new("flag", "boolean")], config);

    let seen: BTreeSet<bool> = (0..200)
        .filter_map(|_| {
            generator
                .generate_row()
                .expect("generate row")
                .get("flag")
                .and_then(GeneratedValue::as_bool)
        })
        .collect();
    assert_eq!(seen, BTreeSet::from([false, true]));
}

#[test]
fn plain_text_is_one_to_ten_words() {
    let config = GeneratorConfig::default().with_seed(13);
    let mut generator = generator(vec![ColumnSpec::new("notes", "character")], config);

    for _ in 0..500 {
        let row = generator.generate_row().expect("generate row");
        let text = row.get("notes").and_then(GeneratedValue::as_str).expect("text");
        let words = text.split(' ').count();
        assert!((1..=10).contains(&words), "{words} words in {text:?}");
    }
}

#[test]
fn row_has_one_entry_per_column_in_schema_order() {
    let config = GeneratorConfig::default().with_seed(14);
    let mut generator = generator(every_type(false), config);

    let row = generator.generate_row().expect("generate row");
    let expected: Vec<&str> = generator.schema().names().collect();
    assert_eq!(row.columns().collect::<Vec<_>>(), expected);
    assert_eq!(row.len(), 9);
}

#[test]
fn generate_value_works_for_columns_outside_the_schema() {
    let config = GeneratorConfig::default().with_seed(15);
    let mut generator = generator(Vec::new(), config);

    let value = generator
        .generate_value(&column(ColumnSpec::new("n", "int").with_bounds(3, 3)))
        .expect("generate value");
    assert_eq!(value, GeneratedValue::Int(3));

    let value = generator
        .generate_value(&column(ColumnSpec::new("x", "float").with_bounds(1.5, 1.5)))
        .expect("generate value");
    assert_eq!(value, GeneratedValue::Float(1.5));

    let row = generator.generate_row().expect("empty row");
    assert!(row.is_empty());
}

#[test]
fn generate_row_with_uses_the_given_schema() {
    let config = GeneratorConfig::default().with_seed(16);
    let mut generator = generator(vec![ColumnSpec::new("a", "int")], config);
    let other = Schema::new(vec![
        ColumnSpec::new("x", "boolean"),
        ColumnSpec::new("y", "date"),
    ])
    .expect("valid schema");

    let row = generator.generate_row_with(&other).expect("generate row");
    assert_eq!(row.columns().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn rows_iterator_yields_requested_count() {
    let config = GeneratorConfig::default().with_seed(17);
    let mut generator = generator(every_type(true), config);

    let rows: Vec<_> = generator
        .rows(25)
        .collect::<Result<_, _>>()
        .expect("generate rows");
    assert_eq!(rows.len(), 25);
}

#[test]
fn invalid_config_is_rejected() {
    let schema = Schema::new(vec![ColumnSpec::new("n", "int")]).expect("valid schema");
    let result = DataGenerator::new(schema, GeneratorConfig::default().with_null_probability(2.0));
    assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
}
