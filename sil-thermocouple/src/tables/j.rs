//! Tipo J: Ferro / Constantan

use crate::range::{ConversionTable, RangeEntry};
use crate::types::{Direction, ThermocoupleType};

static MV_TO_TEMP_1: [f64; 9] = [
    0.0000000e+00, 1.9528268e+01, -1.2286185e+00, -1.0752178e+00,
    -5.9086933e-01, -1.7256713e-01, -2.8131513e-02, -2.3963370e-03,
    -8.3823321e-05,
];

static MV_TO_TEMP_2: [f64; 9] = [
    0.000000e+00, 1.978425e+01, -2.001204e-01, 1.036969e-02,
    -2.549687e-04, 3.585153e-06, -5.344285e-08, 5.099890e-10,
    0.000000e+00,
];

static MV_TO_TEMP_3: [f64; 9] = [
    -3.11358187e+03, 3.00543684e+02, -9.94773230e+00, 1.70276630e-01,
    -1.43033468e-03, 4.73886084e-06, 0.00000000e+00, 0.00000000e+00,
    0.00000000e+00,
];

static MV_TO_TEMP_RANGES: [RangeEntry; 3] = [
    RangeEntry::new(-8.1, 0.0, &MV_TO_TEMP_1),
    RangeEntry::new(0.0, 42.914, &MV_TO_TEMP_2),
    RangeEntry::new(42.914, 69.58, &MV_TO_TEMP_3),
];

pub static VOLTAGE_TO_TEMPERATURE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::J,
    direction: Direction::VoltageToTemperature,
    ranges: &MV_TO_TEMP_RANGES,
    correction: None,
};

static TEMP_TO_MV_1: [f64; 9] = [
    0.000000000000e+00, 0.503811878150e-01, 0.304758369300e-04, -0.856810657200e-07,
    0.132281952950e-09, -0.170529583370e-12, 0.209480906970e-15, -0.125383953360e-18,
    0.156317256970e-22,
];

static TEMP_TO_MV_2: [f64; 6] = [
    0.296456256810e+03, -0.149761277860e+01, 0.317871039240e-02, -0.318476867010e-05,
    0.157208190040e-08, -0.306913690560e-12,
];

static TEMP_TO_MV_RANGES: [RangeEntry; 2] = [
    RangeEntry::new(-210.5, 760.0, &TEMP_TO_MV_1),
    RangeEntry::new(760.0, 1200.5, &TEMP_TO_MV_2),
];

pub static TEMPERATURE_TO_VOLTAGE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::J,
    direction: Direction::TemperatureToVoltage,
    ranges: &TEMP_TO_MV_RANGES,
    correction: None,
};
