use lagna::{BirthMoment, GeoCoordinate, HoroscopeCalculator};

fn bangkok_chart() -> lagna::BirthChart {
    HoroscopeCalculator::default()
        .calculate_chart(
            &BirthMoment::from_ymd_hms(1990, 3, 15, 14, 30, 0).unwrap(),
            GeoCoordinate::BANGKOK,
        )
        .unwrap()
}

#[test]
fn test_first_house_matches_ascendant_exactly() {
    let calc = HoroscopeCalculator::default();
    for hour in 0..24 {
        for lat in [-45.0, 0.0, 13.7563, 60.0] {
            let when = BirthMoment::from_ymd_hms(2010, 6, 21, hour, 45, 30).unwrap();
            let chart = calc.calculate_chart(&when, GeoCoordinate::new(lat, 100.5)).unwrap();
            let first = chart.houses.get(1).unwrap();
            assert_eq!(first.sign_name(), chart.ascendant.sign_name());
            assert_eq!(first.position.degree_in_sign, chart.ascendant.degree_in_sign());
            assert_eq!(first.position.full_degree, chart.ascendant.full_degree());
        }
    }
}

#[test]
fn test_cusps_partition_the_circle() {
    let calc = HoroscopeCalculator::default();
    for day in [1, 9, 17, 25] {
        let when = BirthMoment::from_ymd_hms(1977, 11, day, 3, 20, 0).unwrap();
        let chart = calc.calculate_chart(&when, GeoCoordinate::new(18.79, 98.98)).unwrap();
        let asc = chart.ascendant.full_degree();

        for cusp in &chart.houses {
            let expected = (asc + f64::from(cusp.number - 1) * 30.0) % 360.0;
            assert!((cusp.position.full_degree - expected).abs() < 1e-6);
            assert!((0.0..30.0).contains(&cusp.position.degree_in_sign));
        }

        let mut degrees: Vec<f64> = chart.houses.iter().map(|c| c.position.full_degree).collect();
        degrees.sort_by(|a, b| a.total_cmp(b));
        for pair in degrees.windows(2) {
            assert!((pair[1] - pair[0] - 30.0).abs() < 1e-6);
        }
        assert!((degrees[0] + 360.0 - degrees[11] - 30.0).abs() < 1e-6);
    }
}

#[test]
fn test_each_sign_appears_once() {
    let chart = bangkok_chart();
    let mut indices: Vec<usize> = chart.houses.iter().map(|c| c.position.sign_index()).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
}

#[test]
fn test_bangkok_houses() {
    let chart = bangkok_chart();
    assert_eq!(chart.houses.get(2).unwrap().sign_name(), "มีน");
    assert_eq!(chart.houses.get(3).unwrap().sign_name(), "เมษ");
    assert_eq!(chart.houses.get(7).unwrap().sign_name(), "สิงห์");
    assert_eq!(chart.houses.get(12).unwrap().sign_name(), "มังกร");
    assert_eq!(chart.houses.get(7).unwrap().position.rounded_full_degree(), 141.75);
}

#[test]
fn test_chart_json_shape() {
    let value = serde_json::to_value(bangkok_chart()).unwrap();
    assert_eq!(value["ascendant"]["sign"], "กุมภ์");
    assert_eq!(value["houses"]["1"], value["ascendant"]);
    assert_eq!(value["houses"]["2"]["sign"], "มีน");
    assert_eq!(value["houses"]["2"]["element"], "น้ำ");
    assert_eq!(value["houses"]["2"]["quality"], "Mutable");
    assert_eq!(value["houses"].as_object().unwrap().len(), 12);
}
