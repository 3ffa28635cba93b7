//! Avaliação de polinômios pelo método de Horner
//!
//! Coeficientes em ordem crescente de grau: o índice `i` multiplica `xⁱ`,
//! o índice 0 é o termo constante.

use num_traits::Float;

/// Avalia `c[0] + c[1]·x + … + c[n-1]·xⁿ⁻¹`
///
/// Uma multiplicação e uma soma por termo, do maior grau para o menor.
/// Sequência vazia resulta em zero.
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Polinômio com coeficientes estáticos e não vazios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: &'static [f64],
}

impl Polynomial {
    /// Cria polinômio a partir de coeficientes estáticos
    ///
    /// Em contexto `const`/`static` um slice vazio é erro de compilação.
    pub const fn new(coefficients: &'static [f64]) -> Self {
        assert!(!coefficients.is_empty(), "polynomial needs at least one coefficient");
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &'static [f64] {
        self.coefficients
    }

    /// Grau nominal (número de coeficientes - 1)
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        horner(self.coefficients, x)
    }
}
