//! Termopar configurado para um tipo fixo

use serde::{Deserialize, Serialize};

use crate::convert::{self, CONVERSION_FAILED};
use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::types::{Direction, Domain, ThermocoupleType};

/// Configuração do termopar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermocoupleConfig {
    /// Tipo do termopar
    pub kind: ThermocoupleType,
    /// Valor devolvido pelos métodos `*_or_sentinel` em caso de falha
    pub failure_sentinel: f64,
}

impl Default for ThermocoupleConfig {
    fn default() -> Self {
        Self {
            kind: ThermocoupleType::K,
            failure_sentinel: CONVERSION_FAILED,
        }
    }
}

/// Termopar de um tipo fixo
///
/// Sem estado mutável: só guarda a configuração validada. As conversões
/// delegam para [`crate::calculate_temperature`] e [`crate::calculate_voltage`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thermocouple {
    config: ThermocoupleConfig,
}

impl Thermocouple {
    /// Cria termopar do tipo indicado com sentinela padrão
    pub fn new(kind: ThermocoupleType) -> Self {
        Self {
            config: ThermocoupleConfig {
                kind,
                ..ThermocoupleConfig::default()
            },
        }
    }

    /// Cria termopar com configuração específica
    ///
    /// A sentinela precisa ser finita e ficar fora dos dois domínios do
    /// tipo, senão um resultado legítimo seria confundido com falha.
    pub fn with_config(config: ThermocoupleConfig) -> ThermocoupleResult<Self> {
        let sentinel = config.failure_sentinel;
        if !sentinel.is_finite() {
            return Err(ThermocoupleError::InvalidConfig(
                "Failure sentinel must be finite".into(),
            ));
        }

        for direction in Direction::ALL {
            // O resultado de uma direção vive no domínio de entrada da outra
            let domain = config.kind.domain(direction);
            if domain.contains(sentinel) {
                return Err(ThermocoupleError::InvalidConfig(format!(
                    "Failure sentinel {} lies inside the {} domain of {} [{}, {}]",
                    sentinel, direction.input_unit(), config.kind, domain.min, domain.max
                )));
            }
        }

        Ok(Self { config })
    }

    pub fn kind(&self) -> ThermocoupleType {
        self.config.kind
    }

    pub fn config(&self) -> &ThermocoupleConfig {
        &self.config
    }

    /// Domínio aceito na direção indicada
    pub fn domain(&self, direction: Direction) -> Domain {
        self.config.kind.domain(direction)
    }

    /// Temperatura (°C) para a tensão medida (mV)
    pub fn temperature(&self, voltage_mv: f64) -> ThermocoupleResult<f64> {
        convert::calculate_temperature(self.config.kind, voltage_mv)
    }

    /// Tensão (mV) esperada na temperatura (°C)
    pub fn voltage(&self, temperature_c: f64) -> ThermocoupleResult<f64> {
        convert::calculate_voltage(self.config.kind, temperature_c)
    }

    /// Como [`Thermocouple::temperature`], com a sentinela no lugar do erro
    pub fn temperature_or_sentinel(&self, voltage_mv: f64) -> f64 {
        self.temperature(voltage_mv)
            .unwrap_or(self.config.failure_sentinel)
    }

    /// Como [`Thermocouple::voltage`], com a sentinela no lugar do erro
    pub fn voltage_or_sentinel(&self, temperature_c: f64) -> f64 {
        self.voltage(temperature_c)
            .unwrap_or(self.config.failure_sentinel)
    }
}

impl TryFrom<ThermocoupleConfig> for Thermocouple {
    type Error = ThermocoupleError;

    fn try_from(config: ThermocoupleConfig) -> Result<Self, Self::Error> {
        Self::with_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_type_k() {
        let tc = Thermocouple::default();
        assert_eq!(tc.kind(), ThermocoupleType::K);
        assert_eq!(tc.config().failure_sentinel, CONVERSION_FAILED);
    }

    #[test]
    fn test_default_sentinel_is_valid_for_every_type() {
        for kind in ThermocoupleType::ALL {
            let config = ThermocoupleConfig {
                kind,
                failure_sentinel: CONVERSION_FAILED,
            };
            assert!(Thermocouple::with_config(config).is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_sentinel_inside_domain_rejected() {
        let config = ThermocoupleConfig {
            kind: ThermocoupleType::J,
            failure_sentinel: 0.0,
        };
        let err = Thermocouple::with_config(config).unwrap_err();
        assert!(matches!(err, ThermocoupleError::InvalidConfig(_)));

        // Dentro do domínio de temperatura, fora do de tensão
        let config = ThermocoupleConfig {
            kind: ThermocoupleType::J,
            failure_sentinel: 500.0,
        };
        assert!(Thermocouple::with_config(config).is_err());
    }

    #[test]
    fn test_non_finite_sentinel_rejected() {
        for sentinel in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = ThermocoupleConfig {
                kind: ThermocoupleType::T,
                failure_sentinel: sentinel,
            };
            assert!(Thermocouple::with_config(config).is_err());
        }
    }

    #[test]
    fn test_conversions_delegate() {
        let tc = Thermocouple::new(ThermocoupleType::E);
        assert_eq!(
            tc.temperature(10.0).unwrap(),
            convert::calculate_temperature(ThermocoupleType::E, 10.0).unwrap()
        );
        assert_eq!(
            tc.voltage(250.0).unwrap(),
            convert::calculate_voltage(ThermocoupleType::E, 250.0).unwrap()
        );
    }

    #[test]
    fn test_sentinel_methods() {
        let config = ThermocoupleConfig {
            kind: ThermocoupleType::S,
            failure_sentinel: -9999.0,
        };
        let tc = Thermocouple::with_config(config).unwrap();

        assert_eq!(tc.temperature_or_sentinel(100.0), -9999.0);
        assert_eq!(tc.voltage_or_sentinel(5000.0), -9999.0);
        assert_eq!(tc.voltage_or_sentinel(1000.0), tc.voltage(1000.0).unwrap());
    }

    #[test]
    fn test_domain() {
        let tc = Thermocouple::new(ThermocoupleType::N);
        assert_eq!(tc.domain(Direction::VoltageToTemperature), Domain::new(-4.0, 47.52));
        assert_eq!(tc.domain(Direction::TemperatureToVoltage), Domain::new(-270.5, 1300.5));
    }

    #[test]
    fn test_config_from_json() {
        let config: ThermocoupleConfig =
            serde_json::from_str(r#"{ "kind": "J", "failure_sentinel": -5000.0 }"#).unwrap();
        let tc = Thermocouple::try_from(config).unwrap();
        assert_eq!(tc.kind(), ThermocoupleType::J);
        assert_eq!(tc.temperature_or_sentinel(100.0), -5000.0);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: ThermocoupleConfig = serde_json::from_str(r#"{ "kind": "T" }"#).unwrap();
        assert_eq!(config.kind, ThermocoupleType::T);
        assert_eq!(config.failure_sentinel, CONVERSION_FAILED);

        let config: ThermocoupleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ThermocoupleConfig::default());
    }

    #[test]
    fn test_config_unknown_kind_rejected() {
        let result = serde_json::from_str::<ThermocoupleConfig>(r#"{ "kind": "X" }"#);
        assert!(result.is_err());
    }
}
