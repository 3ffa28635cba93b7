//! Faixas de validade e seleção de polinômio
//!
//! Cada [`ConversionTable`] é uma sequência ordenada de [`RangeEntry`]
//! contíguas. A seleção é uma varredura linear: a primeira faixa cujo
//! intervalo fechado contém o valor vence, então num limite compartilhado
//! a faixa listada antes é a escolhida.

use crate::polynomial::Polynomial;
use crate::types::{Direction, Domain, ThermocoupleType};

/// Faixa `[min, max]` e o polinômio válido nela
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEntry {
    pub min: f64,
    pub max: f64,
    pub polynomial: Polynomial,
}

impl RangeEntry {
    pub const fn new(min: f64, max: f64, coefficients: &'static [f64]) -> Self {
        Self {
            min,
            max,
            polynomial: Polynomial::new(coefficients),
        }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Termo exponencial `a0 · exp(a1 · (x - a2)²)`, somado quando `x > above`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCorrection {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub above: f64,
}

impl ExponentialCorrection {
    /// Valor do termo em `x`, ou zero se `x <= above`
    pub fn term(&self, x: f64) -> f64 {
        if x > self.above {
            let delta = x - self.a2;
            self.a0 * (self.a1 * delta * delta).exp()
        } else {
            0.0
        }
    }
}

/// Tabela de conversão de um tipo numa direção
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionTable {
    pub kind: ThermocoupleType,
    pub direction: Direction,
    pub ranges: &'static [RangeEntry],
    pub correction: Option<ExponentialCorrection>,
}

impl ConversionTable {
    /// Faixa que contém `value` (primeira em ordem de tabela)
    pub fn select(&self, value: f64) -> Option<&RangeEntry> {
        self.ranges.iter().find(|range| range.contains(value))
    }

    /// União das faixas
    pub fn domain(&self) -> Domain {
        match (self.ranges.first(), self.ranges.last()) {
            (Some(first), Some(last)) => Domain::new(first.min, last.max),
            _ => Domain::new(f64::NAN, f64::NAN),
        }
    }

    /// Seleciona a faixa, avalia o polinômio e aplica a correção, se houver
    pub fn evaluate(&self, value: f64) -> Option<f64> {
        let (index, range) = self
            .ranges
            .iter()
            .enumerate()
            .find(|(_, range)| range.contains(value))?;

        tracing::trace!(
            kind = %self.kind,
            direction = %self.direction,
            value,
            range = index,
            "polynomial range selected"
        );

        let mut result = range.polynomial.evaluate(value);
        if let Some(correction) = &self.correction {
            result += correction.term(value);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LOW: [f64; 2] = [0.0, 1.0];
    static HIGH: [f64; 2] = [10.0, 0.0];
    static RANGES: [RangeEntry; 2] = [
        RangeEntry::new(-1.0, 0.0, &LOW),
        RangeEntry::new(0.0, 2.0, &HIGH),
    ];
    static TABLE: ConversionTable = ConversionTable {
        kind: ThermocoupleType::T,
        direction: Direction::VoltageToTemperature,
        ranges: &RANGES,
        correction: None,
    };

    #[test]
    fn test_select_interior() {
        assert_eq!(TABLE.select(-0.5).unwrap().min, -1.0);
        assert_eq!(TABLE.select(1.5).unwrap().min, 0.0);
    }

    #[test]
    fn test_select_inclusive_bounds() {
        assert!(TABLE.select(-1.0).is_some());
        assert!(TABLE.select(2.0).is_some());
    }

    #[test]
    fn test_shared_boundary_goes_to_first_range() {
        let range = TABLE.select(0.0).unwrap();
        assert_eq!(range.max, 0.0);
        // Faixa baixa: y = x → 0; faixa alta daria 10
        assert_eq!(TABLE.evaluate(0.0), Some(0.0));
    }

    #[test]
    fn test_select_outside() {
        assert!(TABLE.select(-1.0000001).is_none());
        assert!(TABLE.select(2.0000001).is_none());
        assert!(TABLE.select(f64::NAN).is_none());
        assert!(TABLE.select(f64::INFINITY).is_none());
        assert_eq!(TABLE.evaluate(3.0), None);
    }

    #[test]
    fn test_domain() {
        assert_eq!(TABLE.domain(), Domain::new(-1.0, 2.0));
    }

    #[test]
    fn test_correction_only_above_threshold() {
        let correction = ExponentialCorrection {
            a0: 2.0,
            a1: -1.0,
            a2: 1.0,
            above: 0.0,
        };
        assert_eq!(correction.term(0.0), 0.0);
        assert_eq!(correction.term(-5.0), 0.0);
        assert_eq!(correction.term(1.0), 2.0);
        assert!((correction.term(2.0) - 2.0 * (-1.0_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_evaluate_adds_correction() {
        let corrected = ConversionTable {
            correction: Some(ExponentialCorrection {
                a0: 1.0,
                a1: 0.0,
                a2: 0.0,
                above: 0.0,
            }),
            ..TABLE
        };
        assert_eq!(corrected.evaluate(-0.5), Some(-0.5));
        assert_eq!(corrected.evaluate(0.0), Some(0.0));
        assert_eq!(corrected.evaluate(1.0), Some(11.0));
    }
}
