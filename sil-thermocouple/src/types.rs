//! Tipos de dados de termopares

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThermocoupleError;
use crate::tables;

/// Tipos de termopar padronizados pela IEC 60584
///
/// Os discriminantes (0..=7) são estáveis e servem como código bruto
/// em [`crate::calculate_temperature_raw`] / [`crate::calculate_voltage_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ThermocoupleType {
    /// Platina-13% Ródio / Platina
    R = 0,
    /// Platina-10% Ródio / Platina
    S = 1,
    /// Platina-30% Ródio / Platina-6% Ródio
    B = 2,
    /// Ferro / Constantan
    J = 3,
    /// Cobre / Constantan
    T = 4,
    /// Cromel / Constantan
    E = 5,
    /// Cromel / Alumel
    K = 6,
    /// Nicrosil / Nisil
    N = 7,
}

impl ThermocoupleType {
    /// Todos os tipos, na ordem dos códigos
    pub const ALL: [ThermocoupleType; 8] = [
        ThermocoupleType::R,
        ThermocoupleType::S,
        ThermocoupleType::B,
        ThermocoupleType::J,
        ThermocoupleType::T,
        ThermocoupleType::E,
        ThermocoupleType::K,
        ThermocoupleType::N,
    ];

    /// Código bruto do tipo (0-7)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Letra de designação (R, S, B, ...)
    pub const fn letter(self) -> char {
        match self {
            ThermocoupleType::R => 'R',
            ThermocoupleType::S => 'S',
            ThermocoupleType::B => 'B',
            ThermocoupleType::J => 'J',
            ThermocoupleType::T => 'T',
            ThermocoupleType::E => 'E',
            ThermocoupleType::K => 'K',
            ThermocoupleType::N => 'N',
        }
    }

    /// Domínio suportado na direção indicada
    ///
    /// Derivado da tabela: `min` da primeira faixa, `max` da última.
    pub fn domain(self, direction: Direction) -> Domain {
        tables::table(self, direction).domain()
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type {}", self.letter())
    }
}

impl TryFrom<u8> for ThermocoupleType {
    type Error = ThermocoupleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ThermocoupleType::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ThermocoupleError::InvalidType(format!("code {}", code)))
    }
}

impl FromStr for ThermocoupleType {
    type Err = ThermocoupleError;

    /// Aceita `"K"`, `"k"`, `"Type K"`, `"type-k"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered
            .strip_prefix("type")
            .unwrap_or(lowered.as_str())
            .trim_start_matches([' ', '-', '_']);

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ThermocoupleType::ALL
                .into_iter()
                .find(|kind| kind.letter().eq_ignore_ascii_case(&c))
                .ok_or_else(|| ThermocoupleError::InvalidType(format!("'{}'", s))),
            _ => Err(ThermocoupleError::InvalidType(format!("'{}'", s))),
        }
    }
}

/// Direção da conversão
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Tensão (mV) → temperatura (°C)
    VoltageToTemperature,
    /// Temperatura (°C) → tensão (mV)
    TemperatureToVoltage,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::VoltageToTemperature, Direction::TemperatureToVoltage];

    /// Unidade da entrada
    pub const fn input_unit(self) -> &'static str {
        match self {
            Direction::VoltageToTemperature => "mV",
            Direction::TemperatureToVoltage => "°C",
        }
    }

    /// Unidade do resultado
    pub const fn output_unit(self) -> &'static str {
        match self {
            Direction::VoltageToTemperature => "°C",
            Direction::TemperatureToVoltage => "mV",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.input_unit(), self.output_unit())
    }
}

/// Intervalo fechado `[min, max]` de entradas aceitas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusivo nas duas pontas; NaN nunca está contido
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (i, kind) in ThermocoupleType::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, i);
            assert_eq!(ThermocoupleType::try_from(i as u8).unwrap(), *kind);
        }
    }

    #[test]
    fn test_invalid_code() {
        let err = ThermocoupleType::try_from(8u8).unwrap_err();
        assert!(err.is_invalid_type());
        assert!(ThermocoupleType::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("K".parse::<ThermocoupleType>().unwrap(), ThermocoupleType::K);
        assert_eq!("k".parse::<ThermocoupleType>().unwrap(), ThermocoupleType::K);
        assert_eq!("Type J".parse::<ThermocoupleType>().unwrap(), ThermocoupleType::J);
        assert_eq!(" type-n ".parse::<ThermocoupleType>().unwrap(), ThermocoupleType::N);

        assert!("X".parse::<ThermocoupleType>().unwrap_err().is_invalid_type());
        assert!("KK".parse::<ThermocoupleType>().is_err());
        assert!("".parse::<ThermocoupleType>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ThermocoupleType::B.to_string(), "Type B");
        assert_eq!(Direction::VoltageToTemperature.to_string(), "mV → °C");
        assert_eq!(Direction::TemperatureToVoltage.to_string(), "°C → mV");
    }

    #[test]
    fn test_display_parses_back() {
        for kind in ThermocoupleType::ALL {
            assert_eq!(kind.to_string().parse::<ThermocoupleType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_domain_contains() {
        let domain = Domain::new(-1.0, 1.0);
        assert!(domain.contains(-1.0));
        assert!(domain.contains(1.0));
        assert!(domain.contains(0.0));
        assert!(!domain.contains(1.0000001));
        assert!(!domain.contains(f64::NAN));
    }

    #[test]
    fn test_type_domains() {
        let k = ThermocoupleType::K;
        assert_eq!(k.domain(Direction::VoltageToTemperature), Domain::new(-5.895, 52.425));
        assert_eq!(k.domain(Direction::TemperatureToVoltage), Domain::new(-270.5, 1372.5));

        let b = ThermocoupleType::B;
        assert_eq!(b.domain(Direction::VoltageToTemperature), Domain::new(0.292, 13.825));
        assert_eq!(b.domain(Direction::TemperatureToVoltage), Domain::new(-0.5, 1820.5));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ThermocoupleType::K).unwrap();
        assert_eq!(json, "\"K\"");
        let kind: ThermocoupleType = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(kind, ThermocoupleType::N);
        assert!(serde_json::from_str::<ThermocoupleType>("\"Z\"").is_err());
    }
}
