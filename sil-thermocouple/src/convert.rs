//! Despacho das conversões mV ⇄ °C
//!
//! Fluxo único: tipo → tabela → faixa → Horner → correção opcional.
//! As duas direções compartilham o mesmo caminho; a única diferença
//! (o termo exponencial do tipo K) é dado da tabela.

use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::tables;
use crate::types::{Direction, ThermocoupleType};

/// Sentinela numérica de falha da API legada
///
/// Só usada pelos métodos `*_or_sentinel` de [`crate::Thermocouple`].
pub const CONVERSION_FAILED: f64 = -1.0e6;

/// Temperatura (°C) a partir da tensão do termopar (mV)
///
/// ```
/// use sil_thermocouple::{calculate_temperature, ThermocoupleType};
///
/// let celsius = calculate_temperature(ThermocoupleType::K, 17.85).unwrap();
/// assert!((celsius - 434.315).abs() < 1e-3);
/// ```
pub fn calculate_temperature(kind: ThermocoupleType, voltage_mv: f64) -> ThermocoupleResult<f64> {
    convert(kind, Direction::VoltageToTemperature, voltage_mv)
}

/// Tensão do termopar (mV) a partir da temperatura (°C)
///
/// Para o tipo K, acima de 0 °C, soma o termo
/// `a0 · exp(a1 · (t - a2)²)` ao polinômio.
pub fn calculate_voltage(kind: ThermocoupleType, temperature_c: f64) -> ThermocoupleResult<f64> {
    convert(kind, Direction::TemperatureToVoltage, temperature_c)
}

/// Como [`calculate_temperature`], recebendo o código bruto do tipo (0-7)
pub fn calculate_temperature_raw(code: u8, voltage_mv: f64) -> ThermocoupleResult<f64> {
    calculate_temperature(resolve(code)?, voltage_mv)
}

/// Como [`calculate_voltage`], recebendo o código bruto do tipo (0-7)
pub fn calculate_voltage_raw(code: u8, temperature_c: f64) -> ThermocoupleResult<f64> {
    calculate_voltage(resolve(code)?, temperature_c)
}

/// Conversão genérica numa direção
pub fn convert(kind: ThermocoupleType, direction: Direction, value: f64) -> ThermocoupleResult<f64> {
    let table = tables::table(kind, direction);

    table.evaluate(value).ok_or_else(|| {
        let domain = table.domain();
        tracing::debug!(
            kind = %kind,
            direction = %direction,
            value,
            min = domain.min,
            max = domain.max,
            "thermocouple input out of range"
        );
        ThermocoupleError::OutOfRange {
            kind,
            direction,
            value,
            min: domain.min,
            max: domain.max,
        }
    })
}

fn resolve(code: u8) -> ThermocoupleResult<ThermocoupleType> {
    ThermocoupleType::try_from(code).inspect_err(|_| {
        tracing::debug!(code, "unknown thermocouple type code");
    })
}
