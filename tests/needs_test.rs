use gizi_calc::calculator::{distribute_meals, NeedsCalculator};
use gizi_calc::models::{Gender, ProfileSource};
use gizi_calc::reference::{brackets_overlapping, resolve_bracket, AgeCategory};

#[test]
fn test_bracket_resolution_across_ages() {
    let cases = [
        (0.5, "0-5months", AgeCategory::Child),
        (1.5, "6-11months", AgeCategory::Child),
        (3.0, "1-3years", AgeCategory::Child),
        (5.0, "4-6years", AgeCategory::Child),
        (9.0, "7-9years", AgeCategory::Child),
        (11.0, "10-12years", AgeCategory::Adult),
        (25.0, "19-29years", AgeCategory::Adult),
        (45.0, "30-49years", AgeCategory::Adult),
        (95.0, "80+years", AgeCategory::Adult),
    ];

    for (age, key, category) in cases {
        let (bracket, cat) = resolve_bracket(age);
        assert_eq!(bracket.key, key, "age {}", age);
        assert_eq!(cat, category, "age {}", age);
    }
}

#[test]
fn test_individual_needs_from_table() {
    let calc = NeedsCalculator::embedded();

    let boy = calc.compute_needs(Gender::Male, 8.0);
    assert_eq!(boy.source, ProfileSource::Table);
    assert_eq!(boy.energy, 1650.0);
    assert_eq!(boy.category, "Laki-laki 8 tahun (7-9 tahun)");

    let woman = calc.compute_needs(Gender::Female, 22.0);
    assert_eq!(woman.energy, 2250.0);
    assert_eq!(woman.protein, 60.0);
    assert_eq!(woman.fat.total, 65.0);
    assert_eq!(woman.fat.omega3, 1.1);
}

#[test]
fn test_female_over_thirty_falls_back_to_young_adult() {
    let calc = NeedsCalculator::embedded();
    let young = calc.compute_needs(Gender::Female, 25.0);
    let older = calc.compute_needs(Gender::Female, 55.0);

    assert_eq!(older.source, ProfileSource::AdultFallback);
    assert_eq!(older.energy, young.energy);
    assert_eq!(older.water, young.water);
    assert_eq!(older.category, "Perempuan 55 tahun");
}

#[test]
fn test_average_is_mean_of_genders() {
    let calc = NeedsCalculator::embedded();
    let avg = calc.compute_average_needs(25.0);

    assert_eq!(avg.source, ProfileSource::GenderAverage);
    assert_eq!(avg.category, "Rata-rata 25 tahun (19-29 tahun)");
    assert_eq!(avg.energy, 2450.0);
    // 62.5 and 34.5 round up
    assert_eq!(avg.protein, 63.0);
    assert_eq!(avg.fiber, 35.0);
    assert_eq!(avg.fat.total, 70.0);
    assert_eq!(avg.fat.omega3, 1.4);
    assert_eq!(avg.carbohydrate, 395.0);
}

#[test]
fn test_average_identical_rows_unchanged() {
    // children rows are the same for both genders
    let calc = NeedsCalculator::embedded();
    let avg = calc.compute_average_needs(5.0);
    let boy = calc.compute_needs(Gender::Male, 5.0);

    assert_eq!(avg.energy, boy.energy);
    assert_eq!(avg.protein, boy.protein);
    assert_eq!(avg.water, boy.water);
}

#[test]
fn test_custom_range_seven_to_twelve() {
    assert_eq!(brackets_overlapping(7.0, 12.0).len(), 2);

    let calc = NeedsCalculator::embedded();
    let range = calc.compute_custom_range_needs(7.0, 12.0);

    assert_eq!(range.source, ProfileSource::RangeAverage);
    assert_eq!(
        range.category,
        "Rata-rata umur 7-12 tahun (7-9 tahun, 10-12 tahun)"
    );
    assert_eq!(range.energy, 1800.0);
    assert_eq!(range.protein, 46.0);
    assert_eq!(range.fat.total, 60.0);
    assert_eq!(range.fat.omega3, 1.0);
    assert_eq!(range.water, 1750.0);
}

#[test]
fn test_custom_range_reversed_matches_forward() {
    let calc = NeedsCalculator::embedded();
    let forward = calc.compute_custom_range_needs(7.0, 12.0);
    let reversed = calc.compute_custom_range_needs(12.0, 7.0);
    assert_eq!(forward, reversed);
}

#[test]
fn test_meal_split_of_average_target() {
    let calc = NeedsCalculator::embedded();
    let target = calc.target_needs(25.0, Some(Gender::Male));
    // adults always get the gender average
    assert_eq!(target.source, ProfileSource::GenderAverage);

    let meals = distribute_meals(&target);
    assert_eq!(meals.energy.breakfast, 613.0);
    assert_eq!(meals.energy.lunch, 735.0);
    assert!((meals.energy.total() - target.energy).abs() <= 5.0);
    assert!((meals.water.total() - target.water).abs() <= 5.0);
}

#[test]
fn test_custom_range_inside_one_bracket() {
    let calc = NeedsCalculator::embedded();

    let range = calc.compute_custom_range_needs(6.5, 6.5);
    assert_eq!(range.source, ProfileSource::RangeAverage);
    assert_eq!(range.category, "Rata-rata umur 6.5-6.5 tahun (7-9 tahun)");
    assert_eq!(range.energy, calc.compute_average_needs(6.5).energy);
}
