//! Tipo B: Platina-30% Ródio / Platina-6% Ródio

use crate::range::{ConversionTable, RangeEntry};
use crate::types::{Direction, ThermocoupleType};

static MV_TO_TEMP_1: [f64; 9] = [
    9.8423321e+01, 6.9971500e+02, -8.4765304e+02, 1.0052644e+03,
    -8.3345952e+02, 4.5508542e+02, -1.5523037e+02, 2.9886750e+01,
    -2.4742860e+00,
];

static MV_TO_TEMP_2: [f64; 9] = [
    2.1315071e+02, 2.8510504e+02, -5.2742887e+01, 9.9160804e+00,
    -1.2965303e+00, 1.1195870e-01, -6.0625199e-03, 1.8661696e-04,
    -2.4878585e-06,
];

static MV_TO_TEMP_RANGES: [RangeEntry; 2] = [
    RangeEntry::new(0.292, 2.431, &MV_TO_TEMP_1),
    RangeEntry::new(2.431, 13.825, &MV_TO_TEMP_2),
];

pub static VOLTAGE_TO_TEMPERATURE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::B,
    direction: Direction::VoltageToTemperature,
    ranges: &MV_TO_TEMP_RANGES,
    correction: None,
};

static TEMP_TO_MV_1: [f64; 7] = [
    0.000000000000e+00, -0.246508183460e-03, 0.590404211710e-05, -0.132579316360e-08,
    0.156682919010e-11, -0.169445292400e-14, 0.629903470940e-18,
];

static TEMP_TO_MV_2: [f64; 9] = [
    -0.389381686210e+01, 0.285717474700e-01, -0.848851047850e-04, 0.157852801640e-06,
    -0.168353448640e-09, 0.111097940130e-12, -0.445154310330e-16, 0.989756408210e-20,
    -0.937913302890e-24,
];

static TEMP_TO_MV_RANGES: [RangeEntry; 2] = [
    RangeEntry::new(-0.5, 630.615, &TEMP_TO_MV_1),
    RangeEntry::new(630.615, 1820.5, &TEMP_TO_MV_2),
];

pub static TEMPERATURE_TO_VOLTAGE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::B,
    direction: Direction::TemperatureToVoltage,
    ranges: &TEMP_TO_MV_RANGES,
    correction: None,
};
