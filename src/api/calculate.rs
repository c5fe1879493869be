//! Integer calculations under `/api/calculate`.
//!
//! Operands and results are `i32`. Overflow wraps (two's complement) rather
//! than widening or panicking, so `sum(i32::MAX, 1) == i32::MIN` and
//! `divide(i32::MIN, -1) == i32::MIN`. Division truncates toward zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ApiError, Json, Request};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sum,
    Product,
    Divide,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Divide => "divide",
        }
    }
}

/// Query parameters shared by every calculation route: `?a=<i32>&b=<i32>`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct Operands {
    pub a: i32,
    pub b: i32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CalculationResult {
    pub operand1: i32,
    pub operand2: i32,
    pub result: i32,
    pub operation: Operation,
}

impl CalculationResult {
    fn new(operation: Operation, a: i32, b: i32, result: i32) -> Self {
        Self {
            operand1: a,
            operand2: b,
            result,
            operation,
        }
    }
}

pub fn sum(a: i32, b: i32) -> CalculationResult {
    CalculationResult::new(Operation::Sum, a, b, a.wrapping_add(b))
}

pub fn product(a: i32, b: i32) -> CalculationResult {
    CalculationResult::new(Operation::Product, a, b, a.wrapping_mul(b))
}

/// Fails with [`ApiError::InvalidArgument`] when `b` is zero.
pub fn divide(a: i32, b: i32) -> Result<CalculationResult, ApiError> {
    if b == 0 {
        return Err(ApiError::invalid_argument("Cannot divide by zero"));
    }
    Ok(CalculationResult::new(Operation::Divide, a, b, a.wrapping_div(b)))
}

/// Applies `operation` to `a` and `b`.
pub fn calculate(operation: Operation, a: i32, b: i32) -> Result<CalculationResult, ApiError> {
    match operation {
        Operation::Sum => Ok(sum(a, b)),
        Operation::Product => Ok(product(a, b)),
        Operation::Divide => divide(a, b),
    }
}

async fn handle(req: Request, operation: Operation) -> Result<Json<CalculationResult>, ApiError> {
    let Operands { a, b } = req.query()?;
    let result = calculate(operation, a, b)?;
    debug!(operation = operation.as_str(), a, b, result = result.result, "calculated");
    Ok(Json(result))
}

pub async fn handle_sum(req: Request) -> Result<Json<CalculationResult>, ApiError> {
    handle(req, Operation::Sum).await
}

pub async fn handle_product(req: Request) -> Result<Json<CalculationResult>, ApiError> {
    handle(req, Operation::Product).await
}

pub async fn handle_divide(req: Request) -> Result<Json<CalculationResult>, ApiError> {
    handle(req, Operation::Divide).await
}
