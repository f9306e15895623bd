use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap::ValueEnum;
use hamdyn_solver::config::Model;
use hamdyn_solver::solver::{GradientMode, Integrator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// directory for snapshot files
    #[arg(short = 'o', long, default_value = ".")]
    pub out_dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModelChoose {
    /// two decoupled harmonic oscillators
    Harmonic,
    /// double pendulum of two identical rods
    DoublePendulum,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IntegratorChoose {
    /// first order, one gradient per step
    SymplecticEuler,
    /// explicit midpoint (EK2), two gradients per step
    ExplicitMidpoint,
    /// two half-weighted finite-difference phases
    FiniteDifferenceRk4,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GradientChoose {
    /// forward differences of the Hamiltonian
    FiniteDifference,
    /// closed form, double pendulum only
    Analytic,
}

impl From<ModelChoose> for Model {
    fn from(value: ModelChoose) -> Self {
        match value {
            ModelChoose::Harmonic => Model::Harmonic,
            ModelChoose::DoublePendulum => Model::DoublePendulum,
        }
    }
}

impl From<IntegratorChoose> for Integrator {
    fn from(value: IntegratorChoose) -> Self {
        match value {
            IntegratorChoose::SymplecticEuler => Integrator::SymplecticEuler,
            IntegratorChoose::ExplicitMidpoint => Integrator::ExplicitMidpoint,
            IntegratorChoose::FiniteDifferenceRk4 => Integrator::FiniteDifferenceRk4,
        }
    }
}

impl From<GradientChoose> for GradientMode {
    fn from(value: GradientChoose) -> Self {
        match value {
            GradientChoose::FiniteDifference => GradientMode::FiniteDifference,
            GradientChoose::Analytic => GradientMode::Analytic,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// integrate a single trajectory, saving q[0],p[0] per snapshot
    Trajectory {
        /// physical model
        #[arg(short = 'm', long, value_enum, default_value_t = ModelChoose::Harmonic)]
        model: ModelChoose,
        /// method of integration
        #[arg(short = 'i', long, value_enum, default_value_t = IntegratorChoose::SymplecticEuler)]
        integrate_method: IntegratorChoose,
        /// source of gradients
        #[arg(short = 'g', long, value_enum, default_value_t = GradientChoose::FiniteDifference)]
        gradient: GradientChoose,
        /// initial positions
        #[arg(short = 'q', long, num_args = 1.., allow_negative_numbers = true, default_values_t = [1.0, 1.0])]
        q: Vec<f64>,
        /// initial momenta
        #[arg(short = 'p', long, num_args = 1.., allow_negative_numbers = true, default_values_t = [0.0, 0.0])]
        p: Vec<f64>,
        /// integration step
        #[arg(short = 'd', long, default_value_t = 1e-4)]
        delta_time: f64,
        /// finite-difference perturbation, time step if not set
        #[arg(long)]
        perturbation: Option<f64>,
        /// simulated time between snapshots
        #[arg(long, default_value_t = 0.01)]
        interval: f64,
        /// number of snapshots after the initial one
        #[arg(short = 'n', long, default_value_t = 10)]
        snapshot_count: usize,
    },
    /// integrate a grid of double pendulums started from rest
    Grid {
        /// method of integration
        #[arg(short = 'i', long, value_enum, default_value_t = IntegratorChoose::ExplicitMidpoint)]
        integrate_method: IntegratorChoose,
        /// source of gradients
        #[arg(short = 'g', long, value_enum, default_value_t = GradientChoose::Analytic)]
        gradient: GradientChoose,
        /// intervals per axis
        #[arg(short = 'r', long, default_value_t = 50)]
        resolution: usize,
        /// x_min x_max y_min y_max, -pi..pi on both axes if not set
        #[arg(short = 'b', long, num_args = 4, allow_negative_numbers = true)]
        bounds: Option<Vec<f64>>,
        /// integration step
        #[arg(short = 'd', long, default_value_t = 1e-4)]
        delta_time: f64,
        /// finite-difference perturbation, time step if not set
        #[arg(long)]
        perturbation: Option<f64>,
        /// simulated time between snapshots
        #[arg(long, default_value_t = 0.01)]
        interval: f64,
        /// number of snapshots after the initial one
        #[arg(short = 'n', long, default_value_t = 10)]
        snapshot_count: usize,
    },
    /// run simulation described by json config
    Run {
        /// path to config file
        #[arg(short = 'c', long)]
        config: PathBuf,
    },
    /// save default grid config to file
    GenerateDefaultConfig {
        /// path to config file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
}
