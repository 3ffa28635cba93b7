//! Tipo K: Cromel / Alumel
//!
//! A direção °C → mV soma, acima de 0 °C, o termo exponencial que modela
//! a inflexão da curva do tipo K. A direção inversa não tem correção:
//! os polinômios inversos já absorvem o termo.

use crate::range::{ConversionTable, ExponentialCorrection, RangeEntry};
use crate::types::{Direction, ThermocoupleType};

static MV_TO_TEMP_1: [f64; 10] = [
    0.0000000e+00, 2.5173462e+01, -1.1662878e+00, -1.0833638e+00,
    -8.9773540e-01, -3.7342377e-01, -8.6632643e-02, -1.0450598e-02,
    -5.1920577e-04, 0.0000000e+00,
];

static MV_TO_TEMP_2: [f64; 10] = [
    0.000000e+00, 2.508355e+01, 7.860106e-02, -2.503131e-01,
    8.315270e-02, -1.228034e-02, 9.804036e-04, -4.413030e-05,
    1.057734e-06, -1.052755e-08,
];

static MV_TO_TEMP_3: [f64; 10] = [
    -1.318058e+02, 4.830222e+01, -1.646031e+00, 5.464731e-02,
    -9.650715e-04, 8.802193e-06, -3.110810e-08, 0.000000e+00,
    0.000000e+00, 0.000000e+00,
];

static MV_TO_TEMP_RANGES: [RangeEntry; 3] = [
    RangeEntry::new(-5.895, 0.0, &MV_TO_TEMP_1),
    RangeEntry::new(0.0, 20.644, &MV_TO_TEMP_2),
    RangeEntry::new(20.644, 52.425, &MV_TO_TEMP_3),
];

pub static VOLTAGE_TO_TEMPERATURE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::K,
    direction: Direction::VoltageToTemperature,
    ranges: &MV_TO_TEMP_RANGES,
    correction: None,
};

static TEMP_TO_MV_1: [f64; 11] = [
    0.000000000000e+00, 0.394501280250e-01, 0.236223735980e-04, -0.328589067840e-06,
    -0.499048287770e-08, -0.675090591730e-10, -0.574103274280e-12, -0.310888728940e-14,
    -0.104516093650e-16, -0.198892668780e-19, -0.163226974860e-22,
];

static TEMP_TO_MV_2: [f64; 10] = [
    -0.176004136860e-01, 0.389212049750e-01, 0.185587700320e-04, -0.994575928740e-07,
    0.318409457190e-09, -0.560728448890e-12, 0.560750590590e-15, -0.320207200030e-18,
    0.971511471520e-22, -0.121047212750e-25,
];

static TEMP_TO_MV_RANGES: [RangeEntry; 2] = [
    RangeEntry::new(-270.5, 0.0, &TEMP_TO_MV_1),
    RangeEntry::new(0.0, 1372.5, &TEMP_TO_MV_2),
];

pub const CORRECTION_A0: f64 = 0.118597600000e+00;
pub const CORRECTION_A1: f64 = -0.118343200000e-03;
pub const CORRECTION_A2: f64 = 0.126968600000e+03;

pub static TEMPERATURE_TO_VOLTAGE: ConversionTable = ConversionTable {
    kind: ThermocoupleType::K,
    direction: Direction::TemperatureToVoltage,
    ranges: &TEMP_TO_MV_RANGES,
    correction: Some(ExponentialCorrection {
        a0: CORRECTION_A0,
        a1: CORRECTION_A1,
        a2: CORRECTION_A2,
        above: 0.0,
    }),
};
