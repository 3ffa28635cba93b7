//! Tabelas de coeficientes IEC 60584
//!
//! Dezesseis tabelas estáticas (8 tipos × 2 direções), indexadas pelo
//! código do tipo. Limites e coeficientes são os literais das tabelas IEC 60584;
//! alterar um limite desloca a fronteira entre faixas.
//!
//! | Tipo | Tensão (mV)         | Temperatura (°C)  |
//! |:-----|:--------------------|:------------------|
//! | R    | [-0.228, 21.105]    | [-50.5, 1768.5]   |
//! | S    | [-0.237, 18.697]    | [-50.5, 1768.5]   |
//! | B    | [0.292, 13.825]     | [-0.5, 1820.5]    |
//! | J    | [-8.1, 69.58]       | [-210.5, 1200.5]  |
//! | T    | [-5.61, 20.88]      | [-270.5, 400.5]   |
//! | E    | [-8.84, 76.38]      | [-270.5, 1000.5]  |
//! | K    | [-5.895, 52.425]    | [-270.5, 1372.5]  |
//! | N    | [-4, 47.52]         | [-270.5, 1300.5]  |

pub mod r;
pub mod s;
pub mod b;
pub mod j;
pub mod t;
pub mod e;
pub mod k;
pub mod n;

use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::range::ConversionTable;
use crate::types::{Direction, ThermocoupleType};

/// `[tensão → temperatura, temperatura → tensão]` por código de tipo
static TABLES: [[&ConversionTable; 2]; 8] = [
    [&r::VOLTAGE_TO_TEMPERATURE, &r::TEMPERATURE_TO_VOLTAGE],
    [&s::VOLTAGE_TO_TEMPERATURE, &s::TEMPERATURE_TO_VOLTAGE],
    [&b::VOLTAGE_TO_TEMPERATURE, &b::TEMPERATURE_TO_VOLTAGE],
    [&j::VOLTAGE_TO_TEMPERATURE, &j::TEMPERATURE_TO_VOLTAGE],
    [&t::VOLTAGE_TO_TEMPERATURE, &t::TEMPERATURE_TO_VOLTAGE],
    [&e::VOLTAGE_TO_TEMPERATURE, &e::TEMPERATURE_TO_VOLTAGE],
    [&k::VOLTAGE_TO_TEMPERATURE, &k::TEMPERATURE_TO_VOLTAGE],
    [&n::VOLTAGE_TO_TEMPERATURE, &n::TEMPERATURE_TO_VOLTAGE],
];

/// Tabela do tipo na direção indicada
pub fn table(kind: ThermocoupleType, direction: Direction) -> &'static ConversionTable {
    let column = match direction {
        Direction::VoltageToTemperature => 0,
        Direction::TemperatureToVoltage => 1,
    };
    TABLES[kind.code() as usize][column]
}

/// Todas as tabelas, na ordem dos códigos
pub fn all() -> impl Iterator<Item = &'static ConversionTable> {
    TABLES.iter().flat_map(|pair| pair.iter().copied())
}

/// Verifica a consistência das tabelas estáticas
///
/// Polinômios vazios já são barrados em tempo de compilação por
/// [`crate::polynomial::Polynomial::new`]; aqui se verifica o resto:
/// rótulo de tipo/direção, limites finitos e ordenados, faixas contíguas.
pub fn validate_tables() -> ThermocoupleResult<()> {
    for kind in ThermocoupleType::ALL {
        for direction in Direction::ALL {
            validate_table(table(kind, direction), kind, direction)?;
        }
    }
    Ok(())
}

fn validate_table(
    table: &ConversionTable,
    kind: ThermocoupleType,
    direction: Direction,
) -> ThermocoupleResult<()> {
    let label = format!("{} ({})", kind, direction);

    if table.kind != kind || table.direction != direction {
        return Err(ThermocoupleError::MalformedTable(format!(
            "{}: table is tagged as {} ({})",
            label, table.kind, table.direction
        )));
    }

    if table.ranges.is_empty() {
        return Err(ThermocoupleError::MalformedTable(format!("{}: no ranges", label)));
    }

    for (i, range) in table.ranges.iter().enumerate() {
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(ThermocoupleError::MalformedTable(format!(
                "{}: range {} has invalid bounds [{}, {}]",
                label, i, range.min, range.max
            )));
        }
        if range.polynomial.coefficients().iter().any(|c| !c.is_finite()) {
            return Err(ThermocoupleError::MalformedTable(format!(
                "{}: range {} has a non-finite coefficient",
                label, i
            )));
        }
    }

    for (i, pair) in table.ranges.windows(2).enumerate() {
        if pair[0].max != pair[1].min {
            return Err(ThermocoupleError::MalformedTable(format!(
                "{}: ranges {} and {} do not touch ({} != {})",
                label,
                i,
                i + 1,
                pair[0].max,
                pair[1].min
            )));
        }
    }

    Ok(())
}
