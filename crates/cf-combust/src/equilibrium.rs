//! Equilibrium solver: damped elemental-potential iteration at fixed T and P.

use crate::config::CombustConfig;
use crate::error::{CombustError, CombustResult};
use crate::reactor::Reactor;
use crate::strategy::{PotentialPass, ReactionStrategy};
use cf_thermo::properties::gibbs;
use tracing::{debug, trace};

/// Equilibrium iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EquilibriumOutcome {
    /// Passes performed
    pub iterations: usize,
    /// Sum of absolute mole-fraction changes on the last pass
    pub residual: f64,
    /// Residual fell below the tolerance
    pub converged: bool,
    /// Element totals still match the seeded reactants
    pub conserved: bool,
}

/// Iterate the strategy's elemental-potential update at `temperature` and
/// the reactor's pressure until the mole fractions settle.
///
/// The result is committed to `reactor.mixture` either way. A non-physical
/// composition after any pass aborts with [`CombustError::Diverged`]; running
/// out of passes is reported through `converged = false`.
///
/// A solve that drifts off the seeded element totals is repeated once from
/// the reactants. If the repeat drifts too, `conserved = false` is reported
/// and the following solve starts from the reactants as well.
pub(crate) fn solve_equilibrium(
    reactor: &mut Reactor,
    strategy: &dyn ReactionStrategy,
    config: &CombustConfig,
    temperature: f64,
) -> CombustResult<EquilibriumOutcome> {
    if reactor.restart_pending {
        reactor.restart()?;
    }
    let mut outcome = iterate(reactor, strategy, config, temperature)?;
    if !reactor.conserves_elements() {
        debug!(
            temperature,
            drift = reactor.element_drift(),
            "element balance lost, restarting from reactants"
        );
        reactor.restart()?;
        outcome = iterate(reactor, strategy, config, temperature)?;
    }
    outcome.conserved = reactor.conserves_elements();
    reactor.restart_pending = !outcome.conserved;
    Ok(outcome)
}

fn iterate(
    reactor: &mut Reactor,
    strategy: &dyn ReactionStrategy,
    config: &CombustConfig,
    temperature: f64,
) -> CombustResult<EquilibriumOutcome> {
    if reactor.first_pass {
        strategy.make_first_guess(reactor.mixture.moles_mut());
        reactor.mixture.recalculate_ratios()?;
        reactor.first_pass = false;
    }

    let gibbs_values: Vec<f64> = reactor
        .mixture
        .compounds()
        .iter()
        .map(|c| gibbs(c, temperature, reactor.pressure))
        .collect();
    let elements = reactor.elements;
    let pass = PotentialPass {
        temperature,
        pressure: reactor.pressure,
        gibbs: &gibbs_values,
        elements: &elements,
        damping: config.damping,
    };

    let mut previous = reactor.mixture.ratios().to_vec();
    let mut ratios = previous.clone();
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations_equil {
        strategy.solve_elem_pot_eqns(&pass, &mut ratios, reactor.mixture.moles_mut());
        check_values(reactor, reactor.mixture.moles(), iteration)?;

        reactor.mixture.recalculate_ratios()?;
        check_values(reactor, reactor.mixture.ratios(), iteration)?;
        if let Some((i, &value)) = reactor
            .mixture
            .ratios()
            .iter()
            .enumerate()
            .find(|(_, r)| **r > 1.0)
        {
            return Err(CombustError::Diverged {
                compound: reactor.mixture.compounds()[i].kind,
                value,
                iteration,
            });
        }

        residual = reactor
            .mixture
            .ratios()
            .iter()
            .zip(&previous)
            .map(|(a, b)| (a - b).abs())
            .sum();
        trace!(temperature, iteration, residual, "equilibrium pass");

        if residual < config.equil_tolerance {
            return Ok(EquilibriumOutcome {
                iterations: iteration,
                residual,
                converged: true,
                conserved: true,
            });
        }
        previous.copy_from_slice(reactor.mixture.ratios());
        ratios.copy_from_slice(&previous);
    }

    Ok(EquilibriumOutcome {
        iterations: config.max_iterations_equil,
        residual,
        converged: false,
        conserved: true,
    })
}

/// NaN or negative entries mean the potential equations went off the rails.
fn check_values(reactor: &Reactor, values: &[f64], iteration: usize) -> CombustResult<()> {
    match values.iter().position(|v| v.is_nan() || *v < 0.0) {
        Some(i) => Err(CombustError::Diverged {
            compound: reactor.mixture.compounds()[i].kind,
            value: values[i],
            iteration,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ch4::CombustCh4;
    use crate::error::ErrorKind;
    use crate::strategy::{Inlet, InletAssessment};
    use cf_thermo::{CompoundType, Element};

    fn seeded(strategy: &CombustCh4, xo: f64, xf: f64) -> Reactor {
        let mut reactor = Reactor::new(strategy.compounds());
        let mut moles = vec![0.0; strategy.compounds().len()];
        let species = [cf_thermo::Species::O2, cf_thermo::Species::CH4];
        let fractions = [xo, xf];
        let inlet = Inlet::new(&fractions, &species).unwrap();
        strategy.update_compound(&inlet, &mut moles).unwrap();
        reactor.seed(&moles, 106.0, 1.207e6).unwrap();
        reactor
    }

    #[test]
    fn conserves_elements() {
        let strategy = CombustCh4::new();
        let config = CombustConfig::default();
        for (xo, xf) in [(0.6, 0.4), (0.8, 0.2)] {
            let mut reactor = seeded(&strategy, xo, xf);
            let before = reactor.elements;
            let outcome = solve_equilibrium(&mut reactor, &strategy, &config, 3000.0).unwrap();
            assert!(outcome.converged, "{xo}/{xf}: {outcome:?}");
            assert!(outcome.conserved);
            let after = reactor.mixture.element_totals();
            for e in [Element::C, Element::H, Element::O] {
                assert!((after[e] - before[e]).abs() < 1e-9, "{e:?}");
            }
        }
    }

    #[test]
    fn lost_element_balance_restarts_from_reactants() {
        let strategy = CombustCh4::new();
        let config = CombustConfig::default();
        let mut reactor = seeded(&strategy, 0.6, 0.4);
        let before = reactor.elements;

        // Far above any flame temperature the potentials cannot hold C/H/O
        let outcome = solve_equilibrium(&mut reactor, &strategy, &config, 9000.0).unwrap();
        assert!(!outcome.conserved);
        assert!(reactor.restart_pending);

        let outcome = solve_equilibrium(&mut reactor, &strategy, &config, 3000.0).unwrap();
        assert!(outcome.conserved);
        assert!(outcome.converged);
        assert!(!reactor.restart_pending);
        let after = reactor.mixture.element_totals();
        for e in [Element::C, Element::H, Element::O] {
            assert!((after[e] - before[e]).abs() < 1e-9, "{e:?}");
        }
    }

    #[test]
    fn hot_products_dissociate() {
        let strategy = CombustCh4::new();
        let mut reactor = seeded(&strategy, 0.6, 0.4);
        solve_equilibrium(&mut reactor, &strategy, &CombustConfig::default(), 3000.0).unwrap();

        let mix = &reactor.mixture;
        let x = |kind| mix.ratios()[mix.index_of(kind).unwrap()];
        assert!(x(CompoundType::H2O) > 0.4);
        assert!(x(CompoundType::CO) > x(CompoundType::CO2));
        assert!(x(CompoundType::OH) > 0.01);
        assert!(!reactor.first_pass);
    }

    #[test]
    fn pass_cap_reports_not_converged() {
        let strategy = CombustCh4::new();
        let mut reactor = seeded(&strategy, 0.6, 0.4);
        let config = CombustConfig {
            max_iterations_equil: 1,
            equil_tolerance: 1e-12,
            ..Default::default()
        };
        let outcome = solve_equilibrium(&mut reactor, &strategy, &config, 3000.0).unwrap();
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
    }

    #[derive(Debug)]
    struct Broken;

    impl ReactionStrategy for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn compounds(&self) -> &[CompoundType] {
            &[CompoundType::O2, CompoundType::O]
        }

        fn update_compound(
            &self,
            _inlet: &Inlet<'_>,
            moles: &mut [f64],
        ) -> CombustResult<InletAssessment> {
            moles[0] = 1.0;
            Ok(InletAssessment {
                combustion_occurs: true,
                unstable: false,
                fuel_fraction: 0.0,
            })
        }

        fn make_first_guess(&self, _moles: &mut [f64]) {}

        fn solve_elem_pot_eqns(&self, _: &PotentialPass<'_>, _: &mut [f64], moles: &mut [f64]) {
            moles[1] = f64::NAN;
        }
    }

    #[test]
    fn nan_is_divergence() {
        let mut reactor = Reactor::new(Broken.compounds());
        reactor.seed(&[1.0, 0.0], 300.0, 1e5).unwrap();
        let err = solve_equilibrium(&mut reactor, &Broken, &CombustConfig::default(), 2000.0)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Divergence);
        assert!(matches!(
            err,
            CombustError::Diverged {
                compound: CompoundType::O,
                iteration: 1,
                ..
            }
        ));
    }
}
