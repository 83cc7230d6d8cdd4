#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::float_cmp,
    clippy::module_name_repetitions
)]

//! Plotcalc, a crate for evaluating and plotting arithmetic expressions.
//!
//! This crate evaluates arithmetic expressions embedded in strings. The
//! easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! assert_eq!(plotcalc::eval("3 + 5 * 2", None), Ok(13.0));
//! ```
//!
//! The second argument to `eval` is an optional [`Scope`](struct.Scope.html),
//! binding the variable `x`:
//!
//! ```
//! use plotcalc::Scope;
//! assert_eq!(plotcalc::eval("2 * x", Some(Scope::new(3.5))), Ok(7.0));
//! ```
//!
//! It is also possible to separate the parsing from the evaluation of an
//! expression with the [`Expr`](struct.Expr.html) type, and to sample a
//! function of `x` for plotting with [`sample`](fn.sample.html):
//!
//! ```
//! use plotcalc::{sample, Expr, PlotConfig};
//!
//! let expr = Expr::parse("x^2 - 1").unwrap();
//! assert_eq!(expr.eval_at(3.0), Ok(8.0));
//! assert_eq!(expr.eval_at(-1.0), Ok(0.0));
//!
//! let points = sample("x^2 - 1", &PlotConfig::default()).unwrap();
//! assert_eq!(points.len(), 640);
//! ```
//!
//! # Language definition
//!
//! The language implemented by plotcalc can contain the following elements:
//!
//! - unsigned decimal literals: `12`, `0.456`, `.5`. There is no exponent
//!   notation;
//! - the constants `pi` and `e`;
//! - the variable `x`;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction or
//!   negation, `*` for multiplication, `/` for division and `^` for
//!   exponentiation.
//!
//! Any other symbol is forbidden in the input.
//!
//! Negation binds tighter than every other operator, then `^` (right
//! associative), then `*` and `/`, then `+` and `-` (left associative).
//!
//! Some numeric anomalies are not errors: a division by zero, an unbound
//! `x` or a power outside of its real domain evaluate to `NaN`, which a plot
//! shows as a break in the curve.
//!
//! # Technical details
//!
//! plotcalc converts the expression to reverse polish notation with the
//! Shunting-Yard algorithm, and evaluates it with a stack machine working
//! only with `f64` data.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod format;
mod lexer;
mod plot;
mod rpn;
mod token;
mod util;

pub use error::Error;
pub use expr::{eval, evaluate, Expr, Scope};
pub use format::format_value;
pub use lexer::{tokenize, Lexer};
pub use plot::{parse_plot_input, sample, segments, Domain, PlotConfig, SamplePoint, Viewport};
pub use rpn::to_rpn;
pub use token::{Constant, Op, Token};
