//! Tipo S: Platina-10% Ródio / Platina

use crate::range::{ConversionTable, RangeEntry};
use crate::types::{Direction, ThermocoupleType};

static MV_TO_TEMP_1: [f64; 10] = [
    0.00000000e+00, 1.84949460e+02, -8.00504062e+01, 1.02237430e+02,
    -1.52248592e+02, 1.88821343e+02, -1.59085941e+02, 8.23027880e+01,
    -2.34181944e+01, 2.79786260e+00,
];

static MV_TO_TEMP_2: [f64; 10] = [
    1.291507177e+01, 1.466298863e+02, -1.534713402e+01, 3.145945973e+00,
    -4.163257839e-01, 3.187963771e-02, -1.291637500e-03, 2.183475087e-05,
    -1.447379511e-07, 8.211272125e-09,
];

static MV_TO_TEMP_3: [f64; 10] = [
    -8.087801117e+01, 1.621573104e+02, -8.536869453e+00, 4.719686976e-01,
    -1.441693666e-02, 2.081618890e-04, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00,
];

static MV_TO_TEMP_4: [f64; 10] = [
    5.333875126e+04, -1.235892298e+04, 1.092657613e+03, -4.265693686e+01,
    6.247205420e-01, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00,
];

static MV_TO_TEMP_RANGES: [RangeEntry; 4] = [
    RangeEntry::new(-0.237, 1.874, &MV_TO_TEMP_1),
    RangeEntry::new(1.874, 10.332, &MV_TO_TEMP_2),
    RangeEntry::new(10.332, 17.536, &MV_TO_TEMP_3),
    RangeEntry::new(17.536, 18.697, &MV_TO_TEMP_4),
];

pub static VOLTAGE_TO_TEMPERATURE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::S,
    direction: Direction::VoltageToTemperature,
    ranges: &MV_TO_TEMP_RANGES,
    correction: None,
};

static TEMP_TO_MV_1: [f64; 9] = [
    0.000000000000e+00, 0.540313308631e-02, 0.125934289740e-04, -0.232477968689e-07,
    0.322028823036e-10, -0.331465196389e-13, 0.255744251786e-16, -0.125068871393e-19,
    0.271443176145e-23,
];

static TEMP_TO_MV_2: [f64; 5] = [
    0.132900444085e+01, 0.334509311344e-02, 0.654805192818e-05, -0.164856259209e-08,
    0.129989605174e-13,
];

static TEMP_TO_MV_3: [f64; 5] = [
    0.146628232636e+03, -0.258430516752e+00, 0.163693574641e-03, -0.330439046987e-07,
    -0.943223690612e-14,
];

static TEMP_TO_MV_RANGES: [RangeEntry; 3] = [
    RangeEntry::new(-50.5, 1064.18, &TEMP_TO_MV_1),
    RangeEntry::new(1064.18, 1664.5, &TEMP_TO_MV_2),
    RangeEntry::new(1664.5, 1768.5, &TEMP_TO_MV_3),
];

pub static TEMPERATURE_TO_VOLTAGE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::S,
    direction: Direction::TemperatureToVoltage,
    ranges: &TEMP_TO_MV_RANGES,
    correction: None,
};
