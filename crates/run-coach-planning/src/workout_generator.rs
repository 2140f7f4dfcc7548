// ABOUTME: Builds one week of structured workouts: a long run, a quality session, and easy runs
// ABOUTME: Session choice and distances follow the week's phase and the recovery-week cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use run_coach_core::constants::race_distances::MARATHON;
use run_coach_core::models::{
    GeneratedWorkout, PaceZone, RecoverySpec, TrainingPaces, TrainingPhase, WorkoutSegment,
    WorkoutStructure, WorkoutType,
};

use crate::config::workout_distances::{
    BASE_TEMPO, BUILD_TEMPO, COOLDOWN, EASY_BASE, EASY_JITTER, EASY_RECOVERY_BASE, LONG_INTERVAL,
    LONG_RUN_FLOOR, RECOVERY_TEMPO, SHORT_INTERVAL, WARMUP,
};
use crate::pace_calculator::PaceCalculator;
use crate::periodization::{is_recovery_week, phase_for_week, plan_progress};
use crate::random::RandomSource;

/// Long-run share of race distance for marathons
const MARATHON_LONG_RUN_SHARE: f64 = 0.5;

/// Long-run share of race distance for shorter races
const SHORT_RACE_LONG_RUN_SHARE: f64 = 0.75;

/// Long run progresses to its full share by two thirds of the plan
const LONG_RUN_RAMP: f64 = 1.5;

/// Taper long run as a share of race distance
const TAPER_LONG_RUN_SHARE: f64 = 0.4;

/// Recovery-week reduction applied to the long run
const RECOVERY_LONG_RUN_FACTOR: f64 = 0.75;

/// Recovery jog between repetitions as a share of repetition distance
const RECOVERY_JOG_SHARE: f64 = 0.5;

/// Build-phase draws above this pick a tempo run over intervals
const BUILD_TEMPO_THRESHOLD: f64 = 0.5;

/// Weekly sessions needed before a quality workout is scheduled
const MIN_SESSIONS_FOR_QUALITY: u32 = 3;

fn km(distance_meters: u32) -> f64 {
    f64::from(distance_meters) / 1000.0
}

/// Weekly workout generator for one plan
#[derive(Debug, Clone, Copy)]
pub struct WorkoutGenerator {
    total_weeks: u32,
    race_distance_meters: u32,
    paces: TrainingPaces,
}

impl WorkoutGenerator {
    /// Generator for a plan of `total_weeks` toward `race_distance_meters`
    #[must_use]
    pub const fn new(total_weeks: u32, race_distance_meters: u32, paces: TrainingPaces) -> Self {
        Self {
            total_weeks,
            race_distance_meters,
            paces,
        }
    }

    /// Workouts for `week_number` (1-based), in slot order
    ///
    /// The long run is always first, followed by the quality session when
    /// `sessions_per_week >= 3`, then easy runs up to `sessions_per_week`.
    pub fn generate_week<R>(
        &self,
        week_number: u32,
        sessions_per_week: u32,
        rng: &mut R,
    ) -> Vec<GeneratedWorkout>
    where
        R: RandomSource + ?Sized,
    {
        let phase = phase_for_week(week_number, self.total_weeks);
        let recovery_week = is_recovery_week(week_number);

        let mut workouts = Vec::with_capacity(sessions_per_week as usize);
        workouts.push(self.long_run(week_number, phase, recovery_week));

        if sessions_per_week >= MIN_SESSIONS_FOR_QUALITY {
            workouts.push(self.quality_workout(phase, recovery_week, rng));
        }

        while workouts.len() < sessions_per_week as usize {
            workouts.push(self.easy_run(recovery_week, rng));
        }

        workouts
    }

    /// Long-run distance for a week
    #[must_use]
    pub fn long_run_distance(
        &self,
        week_number: u32,
        phase: TrainingPhase,
        recovery_week: bool,
    ) -> u32 {
        let race = f64::from(self.race_distance_meters);
        let mut distance = if phase == TrainingPhase::Taper {
            (race * TAPER_LONG_RUN_SHARE).round()
        } else {
            let share = if self.race_distance_meters >= MARATHON {
                MARATHON_LONG_RUN_SHARE
            } else {
                SHORT_RACE_LONG_RUN_SHARE
            };
            let ramp = (plan_progress(week_number, self.total_weeks) * LONG_RUN_RAMP).min(1.0);
            (race * share * ramp).round()
        };

        if recovery_week {
            distance = (distance * RECOVERY_LONG_RUN_FACTOR).round();
        }

        (distance as u32).max(LONG_RUN_FLOOR)
    }

    fn long_run(
        &self,
        week_number: u32,
        phase: TrainingPhase,
        recovery_week: bool,
    ) -> GeneratedWorkout {
        let distance = self.long_run_distance(week_number, phase, recovery_week);
        let easy = self.paces.easy_midpoint();

        GeneratedWorkout {
            workout_type: WorkoutType::LongRun,
            total_distance_meters: distance,
            estimated_duration_seconds: PaceCalculator::segment_duration(distance, easy),
            description: format!("Long run - {:.1}km at easy pace", km(distance)),
            target_pace_sec_per_km: easy.round() as u32,
            pace_zone: PaceZone::Easy,
            structure: WorkoutStructure {
                main: vec![WorkoutSegment::continuous(distance, PaceZone::Easy)
                    .with_description("Long steady run at easy pace")],
                ..WorkoutStructure::default()
            },
        }
    }

    fn quality_workout<R>(
        &self,
        phase: TrainingPhase,
        recovery_week: bool,
        rng: &mut R,
    ) -> GeneratedWorkout
    where
        R: RandomSource + ?Sized,
    {
        if recovery_week {
            return self.tempo_run(RECOVERY_TEMPO, PaceZone::Marathon);
        }

        match phase {
            TrainingPhase::Base => self.tempo_run(BASE_TEMPO, PaceZone::Threshold),
            TrainingPhase::Build => {
                if rng.next_float() > BUILD_TEMPO_THRESHOLD {
                    self.tempo_run(BUILD_TEMPO, PaceZone::Threshold)
                } else {
                    self.interval_workout(LONG_INTERVAL, 5)
                }
            }
            TrainingPhase::Peak => self.interval_workout(LONG_INTERVAL, 6),
            TrainingPhase::Taper => self.interval_workout(SHORT_INTERVAL, 4),
        }
    }

    fn tempo_run(&self, tempo_distance: u32, zone: PaceZone) -> GeneratedWorkout {
        let easy = self.paces.easy_midpoint();
        let pace = self.paces.pace_for_zone(zone);

        let duration = PaceCalculator::segment_duration(WARMUP, easy)
            + PaceCalculator::segment_duration(tempo_distance, pace)
            + PaceCalculator::segment_duration(COOLDOWN, easy);

        GeneratedWorkout {
            workout_type: WorkoutType::TempoRun,
            total_distance_meters: WARMUP + tempo_distance + COOLDOWN,
            estimated_duration_seconds: duration,
            description: format!(
                "2km warmup + {:.1}km @ {zone} + 1km cooldown",
                km(tempo_distance)
            ),
            target_pace_sec_per_km: pace as u32,
            pace_zone: zone,
            structure: WorkoutStructure {
                warmup: vec![WorkoutSegment::continuous(WARMUP, PaceZone::Easy)],
                main: vec![WorkoutSegment::continuous(tempo_distance, zone)
                    .with_description(format!("{:.1}km at {zone} pace", km(tempo_distance)))],
                cooldown: vec![WorkoutSegment::continuous(COOLDOWN, PaceZone::Easy)],
            },
        }
    }

    fn interval_workout(&self, interval_distance: u32, repetitions: u32) -> GeneratedWorkout {
        let easy = self.paces.easy_midpoint();
        let recovery_distance = (f64::from(interval_distance) * RECOVERY_JOG_SHARE).round() as u32;

        let work_total = interval_distance * repetitions;
        let recovery_total = recovery_distance * repetitions.saturating_sub(1);

        let duration = PaceCalculator::segment_duration(WARMUP, easy)
            + PaceCalculator::segment_duration(work_total, f64::from(self.paces.interval))
            + PaceCalculator::segment_duration(recovery_total, easy)
            + PaceCalculator::segment_duration(COOLDOWN, easy);

        let recovery = RecoverySpec {
            distance_meters: recovery_distance,
            pace_zone: PaceZone::Easy,
        };

        GeneratedWorkout {
            workout_type: WorkoutType::Intervals,
            total_distance_meters: WARMUP + work_total + recovery_total + COOLDOWN,
            estimated_duration_seconds: duration,
            description: format!(
                "2km warmup + {repetitions}x{interval_distance}m @ interval pace + 1km cooldown"
            ),
            target_pace_sec_per_km: self.paces.interval,
            pace_zone: PaceZone::Interval,
            structure: WorkoutStructure {
                warmup: vec![WorkoutSegment::continuous(WARMUP, PaceZone::Easy)],
                main: vec![WorkoutSegment::intervals(
                    interval_distance,
                    PaceZone::Interval,
                    repetitions,
                    recovery,
                )
                .with_description(format!(
                    "{repetitions}x{interval_distance}m @ interval pace with {recovery_distance}m recovery"
                ))],
                cooldown: vec![WorkoutSegment::continuous(COOLDOWN, PaceZone::Easy)],
            },
        }
    }

    fn easy_run<R>(&self, recovery_week: bool, rng: &mut R) -> GeneratedWorkout
    where
        R: RandomSource + ?Sized,
    {
        let base = if recovery_week { EASY_RECOVERY_BASE } else { EASY_BASE };
        let distance = base + (rng.next_float() * f64::from(EASY_JITTER)).round() as u32;
        let easy = self.paces.easy_midpoint();

        GeneratedWorkout {
            workout_type: WorkoutType::EasyRun,
            total_distance_meters: distance,
            estimated_duration_seconds: PaceCalculator::segment_duration(distance, easy),
            description: format!("Easy run - {:.1}km at comfortable pace", km(distance)),
            target_pace_sec_per_km: easy.round() as u32,
            pace_zone: PaceZone::Easy,
            structure: WorkoutStructure {
                main: vec![WorkoutSegment::continuous(distance, PaceZone::Easy)
                    .with_description("Easy conversational pace")],
                ..WorkoutStructure::default()
            },
        }
    }
}
