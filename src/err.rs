/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::registry::Shape;
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum OracleError {
    /// Two descriptors share one name
    DuplicateFunction(String),
    /// A reference implementation does not fit the descriptor shape
    ShapeMismatch { name: String, shape: Shape },
    MissingReference(String),
    InvalidTolerance { name: String, value: f32 },
    UnknownFunction(String),
    /// A driver received the wrong number of operands
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::DuplicateFunction(name) => {
                f.write_fmt(format_args!("Function {name} is registered twice"))
            }
            OracleError::ShapeMismatch { name, shape } => f.write_fmt(format_args!(
                "Reference for {name} does not match shape {shape:?}"
            )),
            OracleError::MissingReference(name) => {
                f.write_fmt(format_args!("Function {name} has no usable reference"))
            }
            OracleError::InvalidTolerance { name, value } => {
                f.write_fmt(format_args!("Invalid tolerance {value} for {name}"))
            }
            OracleError::UnknownFunction(name) => {
                f.write_fmt(format_args!("Unknown function: {name}"))
            }
            OracleError::ArityMismatch {
                name,
                expected,
                found,
            } => f.write_fmt(format_args!(
                "{name} expects {expected} operands, {found} were provided"
            )),
        }
    }
}

impl Error for OracleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = OracleError::UnknownFunction("sinh2".to_string());
        assert_eq!(err.to_string(), "Unknown function: sinh2");
        let err = OracleError::ShapeMismatch {
            name: "pow".to_string(),
            shape: Shape::Unary,
        };
        assert_eq!(err.to_string(), "Reference for pow does not match shape Unary");
    }
}
