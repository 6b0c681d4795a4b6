//! The combustor: update entry points, accessors and tuning.

use crate::config::CombustConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{CombustError, CombustResult};
use crate::reactor::{MixtureSummary, Reactor};
use crate::search::{CompositionMode, Conserved, solve_combustion};
use crate::strategy::{BracketSeeds, Inlet, ReactionStrategy};
use cf_core::numeric::{lerp, lerp_weight};
use cf_core::units::{Pressure, Temperature, k, pa, to_kelvin};
use cf_thermo::{CompoundType, Species, ThermoError};
use tracing::debug;

/// Record of the most recent bracketed interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolation {
    /// Actual fuel share of fuel + oxidizer
    pub fuel_fraction: f64,
    /// Fuel share of each bracket
    pub bracket_fuel_fractions: [f64; 2],
    /// Solved temperature of each bracket [K]
    pub bracket_temperatures: [f64; 2],
    /// Blend weight of the upper bracket
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct Bracket {
    fuel_fraction: f64,
    reactor: Reactor,
    summary: MixtureSummary,
}

#[derive(Debug, Clone)]
struct CombustState {
    reactor: Reactor,
    summary: MixtureSummary,
    combustion_occurs: bool,
    unstable: bool,
    fuel_fraction: f64,
    inlet_temperature: f64,
    reactants_enthalpy: f64,
    reactants_entropy: f64,
    brackets: Option<[Bracket; 2]>,
    last_interpolation: Option<Interpolation>,
    diagnostics: Diagnostics,
}

impl CombustState {
    fn new(compounds: &[CompoundType]) -> Self {
        Self {
            reactor: Reactor::new(compounds),
            summary: MixtureSummary::default(),
            combustion_occurs: false,
            unstable: false,
            fuel_fraction: 0.0,
            inlet_temperature: 0.0,
            reactants_enthalpy: 0.0,
            reactants_entropy: 0.0,
            brackets: None,
            last_interpolation: None,
            diagnostics: Diagnostics::default(),
        }
    }
}

/// Equilibrium combustor for one reaction.
///
/// Stateful: composition and temperature carry over between calls, so a
/// recombination call continues from the last combustion. Every update call
/// either succeeds or leaves the combustor exactly as it was.
///
/// ```
/// use cf_combust::{CombustConfig, Combustor, CombustCh4};
/// use cf_core::units::{k, kpa};
/// use cf_thermo::Species;
///
/// let mut combustor = Combustor::new(Box::new(CombustCh4::new()), CombustConfig::default())?;
/// let products = combustor.update_combustion_mixture(
///     k(2000.0),
///     kpa(1207.0),
///     k(106.0),
///     &[0.6, 0.4],
///     &[Species::O2, Species::CH4],
/// )?;
/// assert!(products.temperature > 3000.0);
/// # Ok::<(), cf_combust::CombustError>(())
/// ```
#[derive(Debug)]
pub struct Combustor {
    strategy: Box<dyn ReactionStrategy>,
    config: CombustConfig,
    state: CombustState,
}

impl Combustor {
    pub fn new(strategy: Box<dyn ReactionStrategy>, config: CombustConfig) -> CombustResult<Self> {
        config.validate()?;
        let state = CombustState::new(strategy.compounds());
        Ok(Self {
            strategy,
            config,
            state,
        })
    }

    /// Burn an inlet mixture at constant enthalpy.
    ///
    /// `fractions` and `species` are parallel slices. Products land at the
    /// temperature where their specific enthalpy matches the reactants' at
    /// `inlet_temperature`.
    pub fn update_combustion_mixture(
        &mut self,
        temp_guess: Temperature,
        pressure: Pressure,
        inlet_temperature: Temperature,
        fractions: &[f64],
        species: &[Species],
    ) -> CombustResult<MixtureSummary> {
        let snapshot = self.state.clone();
        let result = self.combust(
            to_kelvin(temp_guess),
            pressure.value,
            to_kelvin(inlet_temperature),
            fractions,
            species,
        );
        if let Err(e) = &result {
            debug!(error = %e, "combustion update failed, state rolled back");
            self.state = snapshot;
        }
        result
    }

    /// Re-equilibrate the current products at a new pressure at constant
    /// entropy.
    pub fn update_recombination_mixture(
        &mut self,
        temp_guess: Temperature,
        pressure: Pressure,
    ) -> CombustResult<MixtureSummary> {
        let snapshot = self.state.clone();
        let result = self.recombine(to_kelvin(temp_guess), pressure.value);
        if let Err(e) = &result {
            debug!(error = %e, "recombination update failed, state rolled back");
            self.state = snapshot;
        }
        result
    }

    fn combust(
        &mut self,
        temp_guess: f64,
        pressure: f64,
        inlet_temperature: f64,
        fractions: &[f64],
        species: &[Species],
    ) -> CombustResult<MixtureSummary> {
        let temp_guess = positive("temperature guess", temp_guess)?;
        let pressure = positive("pressure", pressure)?;
        let inlet_temperature = positive("inlet temperature", inlet_temperature)?;

        let inlet = Inlet::new(fractions, species)?;
        let mut moles = vec![0.0; self.strategy.compounds().len()];
        let assessment = self.strategy.update_compound(&inlet, &mut moles)?;

        let state = &mut self.state;
        state.reactor.seed(&moles, inlet_temperature, pressure)?;
        state.combustion_occurs = assessment.combustion_occurs;
        state.unstable = assessment.unstable;
        state.fuel_fraction = assessment.fuel_fraction;
        state.inlet_temperature = inlet_temperature;
        state.reactants_enthalpy = state.reactor.mixture.enthalpy(inlet_temperature);
        state.reactants_entropy = state.reactor.mixture.entropy(inlet_temperature, pressure);
        state.brackets = None;
        state.last_interpolation = None;

        if !assessment.combustion_occurs {
            debug!(
                fuel_fraction = assessment.fuel_fraction,
                "no combustion, products mirror the inlet"
            );
            state.summary = state.reactor.properties()?;
            return Ok(state.summary);
        }

        if assessment.unstable
            && let Some(seeds) = self.strategy.unstable_brackets(&moles)
        {
            return self.solve_unstable_combustion(seeds, temp_guess, inlet_temperature, pressure);
        }

        let state = &mut self.state;
        let outcome = solve_combustion(
            &mut state.reactor,
            self.strategy.as_ref(),
            &self.config,
            Conserved::Enthalpy,
            state.reactants_enthalpy,
            temp_guess,
            CompositionMode::Equilibrium,
            &mut state.diagnostics,
        )?;
        state.summary = state.reactor.properties()?;
        debug!(
            reaction = self.strategy.name(),
            temperature = state.summary.temperature,
            molecular_weight = state.summary.molecular_weight,
            status = ?outcome.status,
            iterations = outcome.iterations,
            "combustion solved"
        );
        Ok(state.summary)
    }

    fn recombine(&mut self, temp_guess: f64, pressure: f64) -> CombustResult<MixtureSummary> {
        let temp_guess = positive("temperature guess", temp_guess)?;
        let pressure = positive("pressure", pressure)?;

        let total = self.state.reactor.mixture.total_moles();
        if total <= 0.0 {
            return Err(ThermoError::EmptyMixture { total }.into());
        }

        if self.state.unstable
            && let Some(brackets) = self.state.brackets.take()
        {
            return self.solve_unstable_recombination(brackets, temp_guess, pressure);
        }

        let state = &mut self.state;
        let target = state.summary.entropy;
        state.reactor.pressure = pressure;
        let mode = if state.combustion_occurs {
            CompositionMode::Equilibrium
        } else {
            CompositionMode::Frozen
        };
        let outcome = solve_combustion(
            &mut state.reactor,
            self.strategy.as_ref(),
            &self.config,
            Conserved::Entropy,
            target,
            temp_guess,
            mode,
            &mut state.diagnostics,
        )?;
        state.summary = state.reactor.properties()?;
        debug!(
            ?mode,
            temperature = state.summary.temperature,
            pressure_kpa = state.summary.pressure,
            status = ?outcome.status,
            iterations = outcome.iterations,
            "recombination solved"
        );
        Ok(state.summary)
    }

    /// Solve both bracket compositions and interpolate by fuel fraction.
    fn solve_unstable_combustion(
        &mut self,
        seeds: BracketSeeds,
        temp_guess: f64,
        inlet_temperature: f64,
        pressure: f64,
    ) -> CombustResult<MixtureSummary> {
        let BracketSeeds {
            fuel_fractions,
            moles: [lower_moles, upper_moles],
        } = seeds;
        let lower = self.combust_bracket(
            fuel_fractions[0],
            &lower_moles,
            temp_guess,
            inlet_temperature,
            pressure,
        )?;
        let upper = self.combust_bracket(
            fuel_fractions[1],
            &upper_moles,
            temp_guess,
            inlet_temperature,
            pressure,
        )?;
        self.interpolate([lower, upper])
    }

    fn combust_bracket(
        &mut self,
        fuel_fraction: f64,
        moles: &[f64],
        temp_guess: f64,
        inlet_temperature: f64,
        pressure: f64,
    ) -> CombustResult<Bracket> {
        let mut reactor = Reactor::new(self.strategy.compounds());
        reactor.seed(moles, inlet_temperature, pressure)?;
        let target = reactor.mixture.enthalpy(inlet_temperature);
        let outcome = solve_combustion(
            &mut reactor,
            self.strategy.as_ref(),
            &self.config,
            Conserved::Enthalpy,
            target,
            temp_guess,
            CompositionMode::Equilibrium,
            &mut self.state.diagnostics,
        )?;
        let summary = reactor.properties()?;
        debug!(
            fuel_fraction,
            temperature = summary.temperature,
            status = ?outcome.status,
            iterations = outcome.iterations,
            "bracket combustion solved"
        );
        Ok(Bracket {
            fuel_fraction,
            reactor,
            summary,
        })
    }

    /// Re-expand each stored bracket at the new pressure and interpolate again.
    fn solve_unstable_recombination(
        &mut self,
        brackets: [Bracket; 2],
        temp_guess: f64,
        pressure: f64,
    ) -> CombustResult<MixtureSummary> {
        let [mut lower, mut upper] = brackets;
        for bracket in [&mut lower, &mut upper] {
            let target = bracket.summary.entropy;
            bracket.reactor.pressure = pressure;
            let outcome = solve_combustion(
                &mut bracket.reactor,
                self.strategy.as_ref(),
                &self.config,
                Conserved::Entropy,
                target,
                temp_guess,
                CompositionMode::Equilibrium,
                &mut self.state.diagnostics,
            )?;
            bracket.summary = bracket.reactor.properties()?;
            debug!(
                fuel_fraction = bracket.fuel_fraction,
                temperature = bracket.summary.temperature,
                status = ?outcome.status,
                iterations = outcome.iterations,
                "bracket recombination solved"
            );
        }
        self.state.reactor.pressure = pressure;
        self.interpolate([lower, upper])
    }

    fn interpolate(&mut self, brackets: [Bracket; 2]) -> CombustResult<MixtureSummary> {
        let state = &mut self.state;
        let [lower, upper] = &brackets;
        let weight = lerp_weight(state.fuel_fraction, lower.fuel_fraction, upper.fuel_fraction);

        let moles: Vec<f64> = lower
            .reactor
            .mixture
            .moles()
            .iter()
            .zip(upper.reactor.mixture.moles())
            .map(|(&a, &b)| lerp(a, b, weight))
            .collect();
        state.reactor.mixture.set_moles(&moles)?;

        let summary = lower.summary.lerp(&upper.summary, weight);
        state.reactor.temperature = summary.temperature;
        state.summary = summary;
        state.last_interpolation = Some(Interpolation {
            fuel_fraction: state.fuel_fraction,
            bracket_fuel_fractions: [lower.fuel_fraction, upper.fuel_fraction],
            bracket_temperatures: [lower.summary.temperature, upper.summary.temperature],
            weight,
        });
        debug!(
            weight,
            temperature = summary.temperature,
            "interpolated between unstable-band brackets"
        );
        state.brackets = Some(brackets);
        Ok(summary)
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn config(&self) -> &CombustConfig {
        &self.config
    }

    pub fn compounds(&self) -> &[CompoundType] {
        self.strategy.compounds()
    }

    /// Scalar properties from the last update.
    pub fn summary(&self) -> MixtureSummary {
        self.state.summary
    }

    pub fn temperature(&self) -> Temperature {
        k(self.state.summary.temperature)
    }

    pub fn pressure(&self) -> Pressure {
        pa(self.state.reactor.pressure)
    }

    pub fn pressure_kpa(&self) -> f64 {
        self.state.reactor.pressure / 1000.0
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy(&self) -> f64 {
        self.state.summary.enthalpy
    }

    /// Specific entropy [kJ/(kg·K)].
    pub fn entropy(&self) -> f64 {
        self.state.summary.entropy
    }

    /// Specific heat [kJ/(kg·K)].
    pub fn specific_heat(&self) -> f64 {
        self.state.summary.specific_heat
    }

    pub fn gamma(&self) -> f64 {
        self.state.summary.gamma
    }

    /// Molecular weight [g/mol].
    pub fn molecular_weight(&self) -> f64 {
        self.state.summary.molecular_weight
    }

    /// Moles per compound, in [`Combustor::compounds`] order.
    pub fn moles(&self) -> &[f64] {
        self.state.reactor.mixture.moles()
    }

    /// Mole fractions per compound, in [`Combustor::compounds`] order.
    pub fn mole_fractions(&self) -> &[f64] {
        self.state.reactor.mixture.ratios()
    }

    pub fn mole_fraction(&self, kind: CompoundType) -> Option<f64> {
        let mix = &self.state.reactor.mixture;
        mix.index_of(kind).map(|i| mix.ratios()[i])
    }

    pub fn combustion_occurs(&self) -> bool {
        self.state.combustion_occurs
    }

    pub fn is_unstable(&self) -> bool {
        self.state.unstable
    }

    pub fn inlet_temperature(&self) -> Temperature {
        k(self.state.inlet_temperature)
    }

    /// Reactants' specific enthalpy at inlet conditions [kJ/kg].
    pub fn reactants_enthalpy(&self) -> f64 {
        self.state.reactants_enthalpy
    }

    /// Reactants' specific entropy at inlet conditions [kJ/(kg·K)].
    pub fn reactants_entropy(&self) -> f64 {
        self.state.reactants_entropy
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.state.diagnostics
    }

    pub fn last_interpolation(&self) -> Option<Interpolation> {
        self.state.last_interpolation
    }

    pub fn set_max_iterations_equil(&mut self, n: usize) -> CombustResult<()> {
        self.tune(|c| c.max_iterations_equil = n)
    }

    pub fn set_max_iterations_combust(&mut self, n: usize) -> CombustResult<()> {
        self.tune(|c| c.max_iterations_combust = n)
    }

    pub fn set_combust_loops(&mut self, n: usize) -> CombustResult<()> {
        self.tune(|c| c.combust_loops = n)
    }

    /// Initial search step [K].
    pub fn set_temp_step(&mut self, step: f64) -> CombustResult<()> {
        self.tune(|c| c.temp_step = step)
    }

    pub fn set_config(&mut self, config: CombustConfig) -> CombustResult<()> {
        self.tune(|c| *c = config)
    }

    /// Forget all mixture state and counters. Configuration is kept.
    pub fn reset(&mut self) {
        self.state = CombustState::new(self.strategy.compounds());
    }

    fn tune(&mut self, edit: impl FnOnce(&mut CombustConfig)) -> CombustResult<()> {
        let mut config = self.config.clone();
        edit(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

fn positive(what: &'static str, value: f64) -> CombustResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CombustError::NonPhysical { what, value })
    }
}
