//! Temperature search for the combustion and recombination entry points.
//!
//! The search steps the trial temperature in the direction of the residual
//! until the residual changes sign, then shrinks the step tenfold and
//! reverses, for a fixed number of loops. This brackets the root coarsely
//! and assumes the conserved property is monotonic in temperature over the
//! range walked; nothing checks that assumption.

use crate::config::CombustConfig;
use crate::diagnostics::Diagnostics;
use crate::equilibrium::solve_equilibrium;
use crate::error::CombustResult;
use crate::reactor::Reactor;
use crate::strategy::ReactionStrategy;
use tracing::{debug, warn};

/// Property held equal between reactants and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conserved {
    /// Specific enthalpy, for combustion
    Enthalpy,
    /// Specific entropy, for recombination
    Entropy,
}

/// Whether each trial temperature re-equilibrates the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompositionMode {
    Equilibrium,
    Frozen,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    /// All refinement loops completed
    Converged,
    /// Step cap reached; the last trial temperature is kept
    CapReached,
    /// Temperature fell below the floor; the pre-search state was restored
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchOutcome {
    pub status: SearchStatus,
    pub iterations: usize,
}

/// Search for the temperature at which `property` of the reactor's mixture
/// equals `target`, starting from `temp_guess`.
///
/// The accepted temperature is stored in `reactor.temperature`. Soft failures
/// are counted in `diagnostics`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn solve_combustion(
    reactor: &mut Reactor,
    strategy: &dyn ReactionStrategy,
    config: &CombustConfig,
    property: Conserved,
    target: f64,
    temp_guess: f64,
    composition: CompositionMode,
    diagnostics: &mut Diagnostics,
) -> CombustResult<SearchOutcome> {
    let saved = reactor.clone();
    if temp_guess < config.min_temperature {
        return Ok(abandon(reactor, saved, config, temp_guess, 0, diagnostics));
    }

    let mut t = temp_guess;
    let mut residual = evaluate(
        reactor,
        strategy,
        config,
        property,
        target,
        t,
        composition,
        diagnostics,
    )?;
    let mut direction = if residual > 0.0 { 1.0 } else { -1.0 };
    let mut step = config.temp_step;
    let mut iterations = 0;
    let mut status = SearchStatus::Converged;

    'refine: for _ in 0..config.combust_loops {
        loop {
            if iterations >= config.max_iterations_combust {
                diagnostics.search_cap_reached += 1;
                warn!(
                    temperature = t,
                    residual, "temperature search hit the step cap"
                );
                status = SearchStatus::CapReached;
                break 'refine;
            }
            iterations += 1;
            t += direction * step;

            if t < config.min_temperature {
                return Ok(abandon(reactor, saved, config, t, iterations, diagnostics));
            }

            residual = evaluate(
                reactor,
                strategy,
                config,
                property,
                target,
                t,
                composition,
                diagnostics,
            )?;
            if (residual > 0.0) != (direction > 0.0) {
                break;
            }
        }
        step /= 10.0;
        direction = -direction;
    }

    reactor.temperature = t;
    diagnostics.last_search_iterations = iterations;
    debug!(
        ?property,
        temperature = t,
        residual,
        iterations,
        "temperature search finished"
    );
    Ok(SearchOutcome { status, iterations })
}

/// Give up below the temperature floor and put the pre-search state back.
fn abandon(
    reactor: &mut Reactor,
    saved: Reactor,
    config: &CombustConfig,
    t: f64,
    iterations: usize,
    diagnostics: &mut Diagnostics,
) -> SearchOutcome {
    *reactor = saved;
    diagnostics.temperature_floor_hits += 1;
    diagnostics.last_search_iterations = iterations;
    warn!(
        temperature = t,
        floor = config.min_temperature,
        "temperature search abandoned, state restored"
    );
    SearchOutcome {
        status: SearchStatus::Abandoned,
        iterations,
    }
}

/// `target − property(t)` after optionally re-equilibrating at `t`.
#[allow(clippy::too_many_arguments)]
fn evaluate(
    reactor: &mut Reactor,
    strategy: &dyn ReactionStrategy,
    config: &CombustConfig,
    property: Conserved,
    target: f64,
    t: f64,
    composition: CompositionMode,
    diagnostics: &mut Diagnostics,
) -> CombustResult<f64> {
    if composition == CompositionMode::Equilibrium {
        let outcome = solve_equilibrium(reactor, strategy, config, t)?;
        if !outcome.converged {
            diagnostics.equilibrium_not_converged += 1;
            warn!(
                temperature = t,
                residual = outcome.residual,
                passes = outcome.iterations,
                "equilibrium did not converge"
            );
        }
        if !outcome.conserved {
            diagnostics.element_imbalance += 1;
            warn!(
                temperature = t,
                drift = reactor.element_drift(),
                "equilibrium lost element balance"
            );
        }
    }
    let current = match property {
        Conserved::Enthalpy => reactor.mixture.enthalpy(t),
        Conserved::Entropy => reactor.mixture.entropy(t, reactor.pressure),
    };
    Ok(target - current)
}
