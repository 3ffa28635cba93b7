//! Tipo N: Nicrosil / Nisil

use crate::range::{ConversionTable, RangeEntry};
use crate::types::{Direction, ThermocoupleType};

static MV_TO_TEMP_1: [f64; 10] = [
    0.0000000e+00, 3.8436847e+01, 1.1010485e+00, 5.2229312e+00,
    7.2060525e+00, 5.8488586e+00, 2.7754916e+00, 7.7075166e-01,
    1.1582665e-01, 7.3138868e-03,
];

static MV_TO_TEMP_2: [f64; 10] = [
    0.00000e+00, 3.86896e+01, -1.08267e+00, 4.70205e-02,
    -2.12169e-06, -1.17272e-04, 5.39280e-06, -7.98156e-08,
    0.00000e+00, 0.00000e+00,
];

static MV_TO_TEMP_3: [f64; 10] = [
    1.972485e+01, 3.300943e+01, -3.915159e-01, 9.855391e-03,
    -1.274371e-04, 7.767022e-07, 0.000000e+00, 0.000000e+00,
    0.000000e+00, 0.000000e+00,
];

static MV_TO_TEMP_RANGES: [RangeEntry; 3] = [
    RangeEntry::new(-4.0, 0.0, &MV_TO_TEMP_1),
    RangeEntry::new(0.0, 20.613, &MV_TO_TEMP_2),
    RangeEntry::new(20.613, 47.52, &MV_TO_TEMP_3),
];

pub static VOLTAGE_TO_TEMPERATURE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::N,
    direction: Direction::VoltageToTemperature,
    ranges: &MV_TO_TEMP_RANGES,
    correction: None,
};

static TEMP_TO_MV_1: [f64; 9] = [
    0.000000000000e+00, 0.261591059620e-01, 0.109574842280e-04, -0.938411115540e-07,
    -0.464120397590e-10, -0.263033577160e-11, -0.226534380030e-13, -0.760893007910e-16,
    -0.934196678350e-19,
];

static TEMP_TO_MV_2: [f64; 11] = [
    0.000000000000e+00, 0.259293946010e-01, 0.157101418800e-04, 0.438256272370e-07,
    -0.252611697940e-09, 0.643118193390e-12, -0.100634715190e-14, 0.997453389920e-18,
    -0.608632456070e-21, 0.208492293390e-24, -0.306821961510e-28,
];

static TEMP_TO_MV_RANGES: [RangeEntry; 2] = [
    RangeEntry::new(-270.5, 0.0, &TEMP_TO_MV_1),
    RangeEntry::new(0.0, 1300.5, &TEMP_TO_MV_2),
];

pub static TEMPERATURE_TO_VOLTAGE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::N,
    direction: Direction::TemperatureToVoltage,
    ranges: &TEMP_TO_MV_RANGES,
    correction: None,
};
