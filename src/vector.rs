use crate::component::{Component, ROUND_DIGITS};
use crate::operand::{Operand, Product};
use crate::{Result, VectorError};
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// An ordered, fixed-length sequence of numbers.
///
/// Operations never mutate their operands; each one returns a new vector.
/// Binary operations require both operands to have the same dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T: Component> {
    components: Array1<T>,
}

impl<T: Component> Vector<T> {
    pub fn new(components: Array1<T>) -> Self {
        Self { components }
    }

    pub fn from_vec(components: Vec<T>) -> Self {
        Self::new(Array1::from_vec(components))
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &Array1<T> {
        &self.components
    }

    pub fn to_f64(&self) -> Vector<f64> {
        Vector::new(self.components.mapv(T::to_f64))
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "rejecting operands of different dimension: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(Self::new(&self.components + &other.components))
    }

    /// Element-wise difference, each component rounded to [`ROUND_DIGITS`]
    /// decimal places. Integer components are exact and left as they are.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        let diff = Zip::from(&self.components)
            .and(&other.components)
            .map_collect(|&x, &y| (x - y).round_digits(ROUND_DIGITS));
        Ok(Self::new(diff))
    }

    /// Multiply every component by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self::new(self.components.mapv(|x| x * k))
    }

    /// Element-wise (Hadamard) product. Components are coerced to `f64`
    /// before multiplying.
    pub fn hadamard(&self, other: &Self) -> Result<Vector<f64>> {
        self.check_dimension(other)?;
        let product = Zip::from(&self.components)
            .and(&other.components)
            .map_collect(|&x, &y| x.to_f64() * y.to_f64());
        Ok(Vector::new(product))
    }

    /// Scalar multiplication or Hadamard product, depending on the operand.
    ///
    /// ```
    /// use vectores::{Operand, Vector};
    ///
    /// let v = Vector::from_vec(vec![1, 2, 3]);
    /// let scaled = v.multiply(Operand::Scalar(2)).unwrap();
    /// assert_eq!(scaled.to_string(), "Vector([2, 4, 6])");
    ///
    /// let other = Vector::from_vec(vec![4, 5, 6]);
    /// let hadamard = v.multiply(Operand::from(other)).unwrap();
    /// assert_eq!(hadamard.to_string(), "Vector([4.0, 10.0, 18.0])");
    /// ```
    pub fn multiply(&self, rhs: Operand<T>) -> Result<Product<T>> {
        match rhs {
            Operand::Scalar(k) => Ok(Product::Scaled(self.scale(k))),
            Operand::Vector(other) => self.hadamard(&other).map(Product::Hadamard),
        }
    }

    /// Sum of the element-wise products.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_dimension(other)?;
        Ok(self.components.dot(&other.components))
    }

    /// Euclidean magnitude.
    pub fn norm(&self) -> f64 {
        self.components
            .iter()
            .map(|&x| x.to_f64().powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Tangential component of `self` along `onto`.
    ///
    /// The result is `onto` scaled by `(self · onto) / |onto|²`, with each
    /// component rounded to [`ROUND_DIGITS`] decimal places.
    pub fn project(&self, onto: &Self) -> Result<Vector<f64>> {
        self.check_dimension(onto)?;
        let dot = self.to_f64().components.dot(&onto.to_f64().components);
        let squared_norm = onto.norm().powi(2);
        if squared_norm == 0.0 {
            log::debug!("cannot project onto a zero vector of dimension {}", onto.dimension());
            return Err(VectorError::DivisionByZero);
        }
        let scalar = dot / squared_norm;
        log::trace!("projection scalar {scalar}");

        let projected = onto
            .components
            .mapv(|x| (x.to_f64() * scalar).round_digits(ROUND_DIGITS));
        Ok(Vector::new(projected))
    }

    /// Normal component of `self` relative to `from`: `self - self.project(from)`.
    pub fn reject(&self, from: &Self) -> Result<Vector<f64>> {
        let projection = self.project(from)?;
        self.to_f64().sub(&projection)
    }
}

impl<T: Component> From<Vec<T>> for Vector<T> {
    fn from(components: Vec<T>) -> Self {
        Self::from_vec(components)
    }
}

impl<T: Component> From<&[T]> for Vector<T> {
    fn from(components: &[T]) -> Self {
        Self::from_vec(components.to_vec())
    }
}

impl<T: Component> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Component> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([")?;
        for (i, x) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x.repr())?;
        }
        write!(f, "])")
    }
}

impl<T: Component> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.scale(k)
    }
}

impl<T: Component> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.scale(k)
    }
}

// Scalar on the left: `2 * &v`.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<&Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, v: &Vector<$t>) -> Vector<$t> {
                v.scale(self)
            }
        }

        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, v: Vector<$t>) -> Vector<$t> {
                v.scale(self)
            }
        }
    )*};
}

scalar_lhs_mul!(i32, i64, f32, f64);
