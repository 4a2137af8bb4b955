//! Reference outputs for every registered factor, converting 27.08 of the
//! source unit. Each expectation is checked to the number of decimal places
//! it was published with.

use reckon_engine::{build_measurement, convert_measurement, factors, Unit};
use Unit::*;

#[rustfmt::skip]
const FIXTURES: &[(Unit, Unit, f64, i32)] = &[
    (Meter, Millimeter, 27080.0, 3),
    (Meter, Centimeter, 2708.0, 3),
    (Meter, Decimeter, 270.8, 3),
    (Meter, Kilometer, 0.02708, 3),
    (Meter, Inch, 1066.1417, 2),
    (Meter, Foot, 88.845144, 2),
    (Meter, Yard, 29.615048, 1),
    (Meter, Mile, 0.016826732, 4),
    (Millimeter, Meter, 0.02708, 3),
    (Millimeter, Centimeter, 2.708, 3),
    (Millimeter, Decimeter, 0.2708, 3),
    (Millimeter, Kilometer, 2.708e-5, 3),
    (Millimeter, Inch, 1.0661417, 3),
    (Millimeter, Foot, 0.088845144, 3),
    (Millimeter, Yard, 0.029615048, 3),
    (Millimeter, Mile, 1.682673e-5, 3),
    (Centimeter, Meter, 0.2708, 3),
    (Centimeter, Millimeter, 270.8, 3),
    (Centimeter, Decimeter, 2.708, 3),
    (Centimeter, Kilometer, 0.0002708, 3),
    (Centimeter, Inch, 10.661417, 6),
    (Centimeter, Foot, 0.88845144, 3),
    (Centimeter, Yard, 0.29615048, 3),
    (Centimeter, Mile, 0.00016826732, 3),
    (Decimeter, Meter, 2.708, 3),
    (Decimeter, Millimeter, 2708.0, 3),
    (Decimeter, Centimeter, 270.8, 3),
    (Decimeter, Kilometer, 0.002708, 3),
    (Decimeter, Inch, 106.61417, 3),
    (Decimeter, Foot, 8.8845144, 3),
    (Decimeter, Yard, 2.9615048, 3),
    (Decimeter, Mile, 0.0016826732, 5),
    (Kilometer, Meter, 27080.0, 3),
    (Kilometer, Millimeter, 27080000.0, 3),
    (Kilometer, Centimeter, 2708000.0, 3),
    (Kilometer, Decimeter, 270800.0, 3),
    (Kilometer, Inch, 1066139.5999999999, 3),
    (Kilometer, Foot, 88849.48, 2),
    (Kilometer, Yard, 29625.519999999997, 3),
    (Kilometer, Mile, 16.826732, 2),
    (Inch, Meter, 0.687832, 5),
    (Inch, Millimeter, 687.832, 3),
    (Inch, Centimeter, 68.7832, 3),
    (Inch, Decimeter, 6.87832, 4),
    (Inch, Kilometer, 0.000687832, 3),
    (Inch, Foot, 2.2566667, 3),
    (Inch, Yard, 0.75222222, 3),
    (Inch, Mile, 0.0004273989898989899, 3),
    (Foot, Meter, 8.253984, 3),
    (Foot, Millimeter, 8253.984, 3),
    (Foot, Centimeter, 825.3984, 3),
    (Foot, Decimeter, 82.53984, 3),
    (Foot, Kilometer, 0.008253984, 4),
    (Foot, Inch, 324.96, 3),
    (Foot, Yard, 9.0266667, 3),
    (Foot, Mile, 0.0051287879, 3),
    (Yard, Meter, 24.761952, 1),
    (Yard, Millimeter, 24761.952, 3),
    (Yard, Centimeter, 2476.1952, 3),
    (Yard, Decimeter, 247.61952, 3),
    (Yard, Kilometer, 0.024761952, 4),
    (Yard, Inch, 974.88, 3),
    (Yard, Foot, 81.24, 3),
    (Yard, Mile, 0.015386364, 3),
    (Mile, Meter, 43571.719999999994, 3),
    (Mile, Millimeter, 43571720.0, 3),
    (Mile, Centimeter, 4357172.0, 3),
    (Mile, Decimeter, 435717.19999999995, 3),
    (Mile, Kilometer, 43.581036, 1),
    (Mile, Inch, 1715788.8, 3),
    (Mile, Foot, 142982.4, 3),
    (Mile, Yard, 47660.8, 3),
    (SquareMeter, SquareInch, 41974.0, 3),
    (SquareMeter, SquareFeet, 291.48669, 2),
    (SquareMeter, SquareYard, 32.38741, 3),
    (SquareMeter, SquareMile, 1.045565e-5, 3),
    (SquareInch, SquareMeter, 0.017470933, 3),
    (SquareInch, SquareFeet, 0.18805556, 3),
    (SquareInch, SquareYard, 0.020895062, 3),
    (SquareInch, SquareMile, 6.745565e-9, 3),
    (SquareFeet, SquareMeter, 2.5158143, 3),
    (SquareFeet, SquareInch, 3899.52, 3),
    (SquareFeet, SquareYard, 3.0088889, 3),
    (SquareFeet, SquareMile, 9.713613e-7, 3),
    (SquareYard, SquareMeter, 22.642329, 3),
    (SquareYard, SquareInch, 35095.68, 3),
    (SquareYard, SquareFeet, 243.72, 3),
    (SquareYard, SquareMile, 8.742252e-6, 3),
    (SquareMile, SquareMeter, 70137200.0, 3),
    (SquareMile, SquareInch, 108699120000.0, 3),
    (SquareMile, SquareFeet, 754990400.0, 3),
    (SquareMile, SquareYard, 83893840.0, 3),
    (CubicMeter, CubicInch, 1652421.5999999999, 3),
    (CubicMeter, CubicFoot, 956.32117, 1),
    (CubicMeter, CubicYard, 35.419303, 1),
    (CubicMeter, Liter, 27080.0, 3),
    (CubicMeter, Milliliter, 27080000.0, 3),
    (CubicMeter, Centiliter, 2708000.0, 3),
    (CubicMeter, Deciliter, 270800.0, 3),
    (CubicMeter, Hectoliter, 270.8, 3),
    (CubicMeter, Gallon, 7154.535999999999, 3),
    (CubicInch, CubicMeter, 0.00044376169, 3),
    (CubicInch, CubicFoot, 0.015671296, 3),
    (CubicInch, CubicYard, 0.00058041838, 3),
    (CubicInch, Liter, 0.44376169, 4),
    (CubicInch, Milliliter, 443.76169, 1),
    (CubicInch, Centiliter, 44.376169, 1),
    (CubicInch, Deciliter, 4.4376169, 3),
    (CubicInch, Hectoliter, 0.0044376169, 6),
    (CubicInch, Gallon, 0.11722944, 3),
    (CubicFoot, CubicMeter, 0.76682021, 4),
    (CubicFoot, CubicInch, 46794.24, 3),
    (CubicFoot, CubicYard, 1.002963, 3),
    (CubicFoot, Liter, 766.82021, 2),
    (CubicFoot, Milliliter, 766905.6, 3),
    (CubicFoot, Centiliter, 76690.56, 3),
    (CubicFoot, Deciliter, 7669.056, 3),
    (CubicFoot, Hectoliter, 7.6682021, 2),
    (CubicFoot, Gallon, 202.57247, 1),
    (CubicYard, CubicMeter, 20.704146, 2),
    (CubicYard, CubicInch, 1263552.7999999998, 3),
    (CubicYard, CubicFoot, 731.16, 3),
    (CubicYard, Liter, 20705.368, 3),
    (CubicYard, Milliliter, 20705368.0, 3),
    (CubicYard, Centiliter, 2070536.7999999998, 3),
    (CubicYard, Deciliter, 207053.68, 3),
    (CubicYard, Hectoliter, 207.04146, 1),
    (CubicYard, Gallon, 5470.16, 3),
    (Liter, CubicMeter, 0.02708, 3),
    (Liter, CubicInch, 1652.523, 1),
    (Liter, CubicFoot, 0.95632117, 4),
    (Liter, CubicYard, 0.035419303, 4),
    (Liter, Milliliter, 27080.0, 3),
    (Liter, Centiliter, 2708.0, 3),
    (Liter, Deciliter, 270.8, 3),
    (Liter, Hectoliter, 0.2708, 3),
    (Liter, Gallon, 7.1537792, 2),
    (Milliliter, CubicMeter, 2.708e-5, 3),
    (Milliliter, CubicInch, 1.65252, 4),
    (Milliliter, CubicFoot, 0.00095632117, 6),
    (Milliliter, CubicYard, 3.54193e-5, 3),
    (Milliliter, Liter, 0.02708, 3),
    (Milliliter, Centiliter, 2.708, 3),
    (Milliliter, Deciliter, 0.2708, 3),
    (Milliliter, Hectoliter, 0.0002708, 3),
    (Milliliter, Gallon, 0.0071537792, 5),
    (Centiliter, CubicMeter, 0.0002708, 3),
    (Centiliter, CubicInch, 16.52523, 2),
    (Centiliter, CubicFoot, 0.0095632117, 5),
    (Centiliter, CubicYard, 0.00035419303, 3),
    (Centiliter, Liter, 0.2708, 3),
    (Centiliter, Milliliter, 270.8, 3),
    (Centiliter, Deciliter, 2.708, 3),
    (Centiliter, Hectoliter, 0.002708, 3),
    (Centiliter, Gallon, 0.071537792, 3),
    (Deciliter, CubicMeter, 0.002708, 3),
    (Deciliter, CubicInch, 165.2523, 1),
    (Deciliter, CubicFoot, 0.095632117, 4),
    (Deciliter, CubicYard, 0.0035419303, 6),
    (Deciliter, Liter, 2.708, 3),
    (Deciliter, Milliliter, 2708.0, 3),
    (Deciliter, Centiliter, 270.8, 3),
    (Deciliter, Hectoliter, 0.02708, 3),
    (Deciliter, Gallon, 0.71537792, 4),
    (Hectoliter, CubicMeter, 2.708, 3),
    (Hectoliter, CubicInch, 165242.16, 3),
    (Hectoliter, CubicFoot, 95.632117, 1),
    (Hectoliter, CubicYard, 3.5419303, 3),
    (Hectoliter, Liter, 2708.0, 3),
    (Hectoliter, Milliliter, 2708000.0, 3),
    (Hectoliter, Centiliter, 270800.0, 3),
    (Hectoliter, Deciliter, 27080.0, 3),
    (Hectoliter, Gallon, 715.37792, 1),
    (Gallon, CubicMeter, 0.10250895, 3),
    (Gallon, CubicInch, 6255.48, 3),
    (Gallon, CubicFoot, 3.6200694, 3),
    (Gallon, CubicYard, 0.13407665, 4),
    (Gallon, Liter, 102.50895, 1),
    (Gallon, Milliliter, 102497.79999999999, 3),
    (Gallon, Centiliter, 10249.779999999999, 3),
    (Gallon, Deciliter, 1025.0895, 2),
    (Gallon, Hectoliter, 1.0250895, 4),
    (Second, Minute, 0.45133333, 3),
    (Second, Hour, 0.0075222222, 3),
    (Second, Day, 0.00031342593, 3),
    (Second, Year, 8.587012e-7, 3),
    (Minute, Second, 1624.8, 3),
    (Minute, Hour, 0.45133333, 3),
    (Minute, Day, 0.018805556, 3),
    (Minute, Year, 5.152207e-5, 3),
    (Hour, Second, 97488.0, 3),
    (Hour, Minute, 1624.8, 3),
    (Hour, Day, 1.1283333, 3),
    (Hour, Year, 0.0030913242, 3),
    (Day, Second, 2339712.0, 3),
    (Day, Minute, 38995.2, 3),
    (Day, Hour, 649.92, 3),
    (Day, Year, 0.074191781, 3),
    (Year, Second, 854103200.0, 3),
    (Year, Minute, 14233248.0, 3),
    (Year, Hour, 237220.8, 3),
    (Year, Day, 9884.2, 3),
    (MilesPerHour, MetersPerSecond, 12.105843, 3),
    (MilesPerHour, KilometerPerHour, 43.581036, 1),
    (MetersPerSecond, MilesPerHour, 60.576235, 2),
    (MetersPerSecond, KilometerPerHour, 97.488, 3),
    (KilometerPerHour, MilesPerHour, 16.826732, 2),
    (KilometerPerHour, MetersPerSecond, 7.5222222, 3),
    (Gram, Kilogram, 0.02708, 3),
    (Kilogram, Gram, 27080.0, 3),
];

#[test]
fn test_fixtures_cover_the_whole_table() {
    assert_eq!(FIXTURES.len(), factors::entries().count());
    for (from, to, _) in factors::entries() {
        assert!(
            FIXTURES.iter().any(|&(f, t, _, _)| f == from && t == to),
            "no fixture for {from} → {to}"
        );
    }
}

#[test]
fn test_converted_values_match_fixtures() {
    let mut failures = Vec::new();
    for &(from, to, expected, places) in FIXTURES {
        let result = convert_measurement(&build_measurement(from, 27.08), to).unwrap();
        assert_eq!(result.unit, to);
        let tolerance = 0.5 * 10f64.powi(-places);
        if (result.value - expected).abs() >= tolerance {
            failures.push(format!(
                "{from} → {to}: got {}, expected {expected} ({places} places)",
                result.value
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
