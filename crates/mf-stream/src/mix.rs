//! Stream mixing under mole and enthalpy conservation.
//!
//! Mixing two streams produces a new stream whose:
//! - molar flow is the sum of the feed flows,
//! - composition is the flow-weighted union of the feed compositions,
//! - pressure is the minimum of the feed pressures,
//! - temperature satisfies the enthalpy balance
//!   `flow · h(T_mix, P_mix, x_mix) = Σ flow_i · h(T_i, P_i, x_i)`.
//!
//! The temperature is found by bisection on the enthalpy residual over a
//! bracket spanning the feed temperatures, widened by a margin. If the root
//! is not bracketed (strongly non-ideal enthalpy), the margin doubles a few
//! times before giving up.

use crate::error::{StreamError, StreamResult};
use crate::stream::Stream;
use mf_core::units::{Pressure, k};
use mf_props::{Composition, PropertyModel, Species, ThermoState};
use tracing::{debug, trace};

/// Tuning knobs for the enthalpy-balance temperature solve.
#[derive(Debug, Clone, Copy)]
pub struct MixOptions {
    /// Relative tolerance on the enthalpy residual.
    pub rel_tol: f64,
    /// Maximum bisection iterations.
    pub max_iter: usize,
    /// Initial margin [K] added around the feed temperature span.
    pub bracket_margin_k: f64,
}

impl Default for MixOptions {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            max_iter: 100,
            bracket_margin_k: 10.0,
        }
    }
}

/// Bracket expansion attempts before the solve is declared unbracketed.
const MAX_BRACKET_EXPANSIONS: usize = 6;

/// Lowest admissible bracket temperature [K].
const T_FLOOR: f64 = 1.0;

/// Mix two streams with default options.
pub fn mix<M>(a: &Stream, b: &Stream, model: &M) -> StreamResult<Stream>
where
    M: PropertyModel + ?Sized,
{
    mix_with(a, b, model, MixOptions::default())
}

/// Mix two streams, solving the outlet temperature from the enthalpy balance.
pub fn mix_with<M>(a: &Stream, b: &Stream, model: &M, opts: MixOptions) -> StreamResult<Stream>
where
    M: PropertyModel + ?Sized,
{
    let total_flow = a.flow() + b.flow();
    if total_flow <= 0.0 {
        return Err(StreamError::DegenerateMixture);
    }

    let comp = combined_composition(a, b, total_flow)?;
    let p_out = min_pressure(a.pressure(), b.pressure());

    // Total enthalpy carried into the junction [J/s].
    let h_target = a.enthalpy_rate(model)? + b.enthalpy_rate(model)?;

    let t_a = a.temperature().value;
    let t_b = b.temperature().value;
    let t_out = solve_temperature(
        model,
        &comp,
        p_out,
        total_flow,
        h_target,
        t_a.min(t_b),
        t_a.max(t_b),
        opts,
    )?;

    let state = ThermoState::from_pt(p_out, k(t_out), comp)?;
    Ok(Stream::from_parts(total_flow, state))
}

/// Mix any number of streams by folding pairwise.
///
/// Bisection convergence makes the result associative only up to the solve
/// tolerance; feeds are folded left to right.
pub fn mix_all<M>(streams: &[Stream], model: &M, opts: MixOptions) -> StreamResult<Stream>
where
    M: PropertyModel + ?Sized,
{
    let Some((first, rest)) = streams.split_first() else {
        return Err(StreamError::DegenerateMixture);
    };
    rest.iter().try_fold(first.clone(), |acc, next| {
        mix_with(&acc, next, model, opts)
    })
}

/// Flow-weighted union of the two feed compositions.
fn combined_composition(a: &Stream, b: &Stream, total_flow: f64) -> StreamResult<Composition> {
    let mut fractions: Vec<(Species, f64)> = Vec::new();
    for species in a.composition().species() {
        let x = (a.component_flow(species) + b.component_flow(species)) / total_flow;
        fractions.push((species, x));
    }
    for species in b.composition().species() {
        if !a.composition().contains(species) {
            let x = b.component_flow(species) / total_flow;
            fractions.push((species, x));
        }
    }
    Ok(Composition::from_mole_fractions(fractions)?)
}

fn min_pressure(a: Pressure, b: Pressure) -> Pressure {
    if b.value < a.value { b } else { a }
}

/// Bisect the enthalpy residual `g(T) = flow · h(T) − H_target` to find the
/// outlet temperature.
#[allow(clippy::too_many_arguments)]
fn solve_temperature<M>(
    model: &M,
    comp: &Composition,
    p: Pressure,
    total_flow: f64,
    h_target: f64,
    t_min: f64,
    t_max: f64,
    opts: MixOptions,
) -> StreamResult<f64>
where
    M: PropertyModel + ?Sized,
{
    let residual = |t: f64| -> StreamResult<f64> {
        let state = ThermoState::from_pt(p, k(t), comp.clone())?;
        Ok(total_flow * model.enthalpy_molar(&state)? - h_target)
    };

    let tol = opts.rel_tol * h_target.abs().max(1.0);

    // Bracket the root, widening the margin if the enthalpy balance falls
    // outside the feed temperature span.
    let mut margin = opts.bracket_margin_k;
    let mut t_lo = (t_min - margin).max(T_FLOOR);
    let mut t_hi = t_max + margin;
    let mut g_lo = residual(t_lo)?;
    let mut g_hi = residual(t_hi)?;

    let mut expansions = 0;
    while g_lo.signum() == g_hi.signum() {
        if g_lo.abs() < tol {
            return Ok(t_lo);
        }
        if g_hi.abs() < tol {
            return Ok(t_hi);
        }
        if expansions >= MAX_BRACKET_EXPANSIONS {
            debug!(
                t_lo,
                t_hi, g_lo, g_hi, "enthalpy balance not bracketed after expansion"
            );
            return Err(StreamError::MixingNonConvergence {
                residual: g_lo.abs().min(g_hi.abs()),
                iterations: 0,
            });
        }
        margin *= 2.0;
        t_lo = (t_min - margin).max(T_FLOOR);
        t_hi = t_max + margin;
        g_lo = residual(t_lo)?;
        g_hi = residual(t_hi)?;
        expansions += 1;
    }

    let mut g_mid = f64::NAN;
    for iter in 0..opts.max_iter {
        let t_mid = 0.5 * (t_lo + t_hi);
        g_mid = residual(t_mid)?;
        trace!(iter, t_mid, g_mid, "bisection step");

        if g_mid.abs() < tol {
            debug!(
                t_mix = t_mid,
                iterations = iter + 1,
                residual = g_mid,
                "mixing temperature converged"
            );
            return Ok(t_mid);
        }

        if g_mid.signum() == g_lo.signum() {
            t_lo = t_mid;
            g_lo = g_mid;
        } else {
            t_hi = t_mid;
        }
    }

    Err(StreamError::MixingNonConvergence {
        residual: g_mid.abs(),
        iterations: opts.max_iter,
    })
}
