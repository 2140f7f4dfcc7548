// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for run-coach
// ABOUTME: Provides consistent display functions for plans, paces, estimates, and progress

use run_coach_core::models::{ScheduledWorkout, TrainingPaces};
use run_coach_planning::algorithms::EquivalentTime;
use run_coach_planning::periodization::phase_for_week;
use run_coach_planning::{
    GeneratedPlan, PaceCalculator, TodayLookup, VdotEstimate, VdotProvenance, WeekSummary,
};

/// Format seconds as `H:MM:SS`, or `MM:SS` under an hour
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format meters as kilometers with one decimal
pub fn format_distance(meters: u32) -> String {
    format!("{:.1} km", f64::from(meters) / 1000.0)
}

fn provenance_label(provenance: VdotProvenance) -> &'static str {
    match provenance {
        VdotProvenance::Manual => "manual entry",
        VdotProvenance::RaceResult => "recent race",
        VdotProvenance::ActivityHistory => "activity history",
    }
}

/// Display the fitness estimate and its source
pub fn display_estimate(estimate: &VdotEstimate) {
    println!(
        "VDOT: {:.1} (from {})",
        estimate.vdot,
        provenance_label(estimate.provenance)
    );

    if let Some(analysis) = &estimate.analysis {
        if analysis.is_fallback() {
            println!("   Not enough recent runs; using a conservative default");
        } else {
            println!("   Runs analyzed: {}", analysis.activity_count);
            println!(
                "   Average pace: {}/km",
                PaceCalculator::format_pace(analysis.average_pace_sec_per_km.round() as u32)
            );
            println!(
                "   Weekly volume: {}",
                format_distance(analysis.weekly_volume_meters.round() as u32)
            );
            println!(
                "   Longest run: {}",
                format_distance(analysis.longest_run_meters.round() as u32)
            );
        }
    }
}

/// Display equivalent race times
pub fn display_equivalent_times(times: &[EquivalentTime]) {
    println!("\nPredicted race times:");
    for time in times {
        println!(
            "   {:>10}  {}",
            format_distance(time.distance_meters),
            format_duration(time.time_seconds)
        );
    }
}

/// Display a training pace table
pub fn display_paces(vdot: f64, paces: &TrainingPaces) {
    println!("Training paces for VDOT {vdot:.1}");
    println!("{}", "=".repeat(40));
    println!(
        "   Easy:        {}-{}/km",
        PaceCalculator::format_pace(paces.easy.min),
        PaceCalculator::format_pace(paces.easy.max)
    );
    println!("   Marathon:    {}/km", PaceCalculator::format_pace(paces.marathon));
    println!("   Threshold:   {}/km", PaceCalculator::format_pace(paces.threshold));
    println!("   Interval:    {}/km", PaceCalculator::format_pace(paces.interval));
    println!(
        "   Repetition:  {}/km",
        PaceCalculator::format_pace(paces.repetition)
    );
}

fn display_workout_line(workout: &ScheduledWorkout) {
    let status = if workout.is_completed() { "x" } else { " " };
    println!(
        "   [{status}] {} {:<10} {:>8}  {:>7}  {}",
        workout.scheduled_date.format("%a %Y-%m-%d"),
        workout.workout.workout_type.as_str(),
        format_distance(workout.workout.total_distance_meters),
        format_duration(workout.workout.estimated_duration_seconds),
        workout.workout.description
    );
}

/// Display a generated plan week by week
pub fn display_plan(plan: &GeneratedPlan) {
    let spec = &plan.spec;
    println!("\n{}", spec.name);
    println!("{}", "=".repeat(80));
    println!(
        "   Race: {} on {}",
        format_distance(spec.race_distance_meters),
        spec.race_date
    );
    println!(
        "   Weeks: {} starting {} ({} sessions per week)",
        spec.total_weeks, spec.start_date, spec.sessions_per_week
    );
    display_estimate(&plan.vdot_estimate);
    println!();
    display_paces(spec.vdot, &spec.paces);

    for week_number in 1..=spec.total_weeks {
        let phase = phase_for_week(week_number, spec.total_weeks);
        println!(
            "\nWeek {week_number} ({phase}) - {}",
            format_distance(plan.week_distance(week_number))
        );
        for workout in plan.week(week_number) {
            display_workout_line(workout);
        }
    }
}

/// Display one week's progress
pub fn display_week_summary(summary: &WeekSummary) {
    println!(
        "Week {} ({} to {}): {}/{} workouts completed, {} planned",
        summary.week_number,
        summary.start,
        summary.end,
        summary.completed,
        summary.total_workouts,
        format_distance(summary.total_distance_meters)
    );
}

/// Display today's workout or the next one
pub fn display_today(lookup: &TodayLookup<'_>) {
    match lookup {
        TodayLookup::Scheduled(workout) => {
            println!("\nToday:");
            display_workout_line(workout);
        }
        TodayLookup::Rest { next: Some(workout) } => {
            println!("\nRest day. Next workout:");
            display_workout_line(workout);
        }
        TodayLookup::Rest { next: None } => println!("\nNo workouts remaining in this plan"),
    }
}
