//! Erros de conversão de termopar

use thiserror::Error;
use crate::types::{Direction, ThermocoupleType};

pub type ThermocoupleResult<T> = Result<T, ThermocoupleError>;

/// Erros do módulo de termopares
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermocoupleError {
    /// Código ou nome que não identifica nenhum dos 8 tipos
    #[error("Invalid thermocouple type: {0}")]
    InvalidType(String),

    /// Entrada fora de todas as faixas definidas para o tipo
    #[error("Out of range: {value} is outside the {direction} domain of {kind} [{min}, {max}]")]
    OutOfRange {
        kind: ThermocoupleType,
        direction: Direction,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Tabela estática inconsistente (detectado só na validação)
    #[error("Malformed coefficient table: {0}")]
    MalformedTable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ThermocoupleError {
    /// Verdadeiro para [`ThermocoupleError::InvalidType`]
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, ThermocoupleError::InvalidType(_))
    }

    /// Verdadeiro para [`ThermocoupleError::OutOfRange`]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ThermocoupleError::OutOfRange { .. })
    }
}
