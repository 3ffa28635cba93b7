//! # 🌡️ sil-thermocouple — Conversão mV ⇄ °C para Termopares
//!
//! Converte a tensão de um termopar (milivolts) em temperatura (graus
//! Celsius) e vice-versa para os oito tipos padronizados pela IEC 60584
//! (R, S, B, J, T, E, K, N), usando aproximações polinomiais por faixa.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  tipo + escalar                                              │
//! │        │                                                     │
//! │        ▼                                                     │
//! │  ┌─────────────┐   ┌──────────────┐   ┌───────────────────┐  │
//! │  │   tables    │──▶│    range     │──▶│    polynomial     │  │
//! │  │ (16 tabelas)│   │  (seleção)   │   │     (Horner)      │  │
//! │  └─────────────┘   └──────────────┘   └─────────┬─────────┘  │
//! │                                                 │            │
//! │                                      correção exponencial    │
//! │                                       (tipo K, °C → mV)      │
//! │                                                 │            │
//! │                                                 ▼            │
//! │                                  Ok(valor) | Err(InvalidType │
//! │                                             | OutOfRange)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tudo é dado estático e funções puras: as conversões podem ser chamadas
//! de qualquer número de threads sem sincronização.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use sil_thermocouple::{calculate_temperature, calculate_voltage, ThermocoupleType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let celsius = calculate_temperature(ThermocoupleType::K, 17.85)?;
//! assert!((celsius - 434.315).abs() < 1e-3);
//!
//! let millivolts = calculate_voltage(ThermocoupleType::K, -156.0)?;
//! assert!((millivolts + 5.0517).abs() < 1e-4);
//!
//! // Fora do domínio: erro tipado, não um número mágico
//! assert!(calculate_temperature(ThermocoupleType::K, 60.0).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Módulos
//!
//! - [`convert`] - Despacho das conversões
//! - [`thermocouple`] - Termopar de tipo fixo com configuração
//! - [`tables`] - Tabelas de coeficientes
//! - [`range`] - Faixas e seleção
//! - [`polynomial`] - Avaliação por Horner
//! - [`types`] - Tipos de termopar, direção, domínio
//! - [`error`] - Tratamento de erros

pub mod error;
pub mod types;
pub mod polynomial;
pub mod range;
pub mod tables;
pub mod convert;
pub mod thermocouple;

// Re-exportar tipos principais
pub use error::{ThermocoupleError, ThermocoupleResult};
pub use types::{Direction, Domain, ThermocoupleType};
pub use polynomial::{horner, Polynomial};
pub use range::{ConversionTable, ExponentialCorrection, RangeEntry};
pub use tables::{table, validate_tables};
pub use convert::{
    calculate_temperature, calculate_temperature_raw, calculate_voltage, calculate_voltage_raw,
    convert, CONVERSION_FAILED,
};
pub use thermocouple::{Thermocouple, ThermocoupleConfig};
