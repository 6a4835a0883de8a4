//! This module is responsible for generating all visualizations from a
//! completed estimate.

use anyhow::Result;
use plotters::prelude::*;
use reclaim_schemas::{
    input::InputState,
    phase::ClosurePhase,
    results::Results,
};

/// The main function to generate and save all charts for an estimation run.
pub fn generate_all_plots(output_dir: &str, input: &InputState, results: &Results) -> Result<()> {
    println!("[Plotting] Generating charts from estimation results...");

    if results.cashflows.is_empty() {
        println!("[Plotting] Warning: No cashflow data to plot.");
        return Ok(());
    }

    plot_annual_cashflow(output_dir, results)?;
    plot_cumulative_cashflow(output_dir, results)?;
    plot_phase_timeline(output_dir, input, results)?;
    plot_category_breakdown(output_dir, results)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

/// Annual nominal spend as bars with the discounted series overlaid.
fn plot_annual_cashflow(output_dir: &str, results: &Results) -> Result<()> {
    let path = format!("{}/1_annual_cashflow.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let first_year = results.cashflows.first().map_or(0, |cf| cf.year);
    let last_year = results.cashflows.last().map_or(1, |cf| cf.year);
    let max_cost = results
        .cashflows
        .iter()
        .map(|cf| cf.nominal_cost.max(cf.escalated_cost))
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Annual Closure Cashflow", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(first_year..last_year + 1, 0f64..max_cost * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Cost ($)")
        .draw()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(RGBColor(70, 130, 180).mix(0.6).filled())
                .data(results.cashflows.iter().map(|cf| (cf.year, cf.nominal_cost))),
        )?
        .label("Nominal")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(70, 130, 180).filled())
        });

    chart
        .draw_series(LineSeries::new(
            results.cashflows.iter().map(|cf| (cf.year, cf.escalated_cost)),
            RED.stroke_width(2),
        ))?
        .label("Escalated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            results.cashflows.iter().map(|cf| (cf.year, cf.discounted_cost)),
            GREEN.stroke_width(2),
        ))?
        .label("Discounted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Cumulative nominal and discounted spend over the programme.
fn plot_cumulative_cashflow(output_dir: &str, results: &Results) -> Result<()> {
    let path = format!("{}/2_cumulative_cashflow.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let first_year = results.cashflows.first().map_or(0, |cf| cf.year);
    let last_year = results.cashflows.last().map_or(1, |cf| cf.year);
    let max_cumulative = results
        .cashflows
        .last()
        .map_or(1.0, |cf| cf.cumulative_nominal)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Cumulative Closure Cost", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(first_year..last_year + 1, 0f64..max_cumulative * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Cumulative cost ($)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            results
                .cashflows
                .iter()
                .map(|cf| (cf.year, cf.cumulative_nominal)),
            RGBColor(70, 130, 180).stroke_width(3),
        ))?
        .label("Cumulative nominal")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(70, 130, 180).filled())
        });

    chart
        .draw_series(LineSeries::new(
            results
                .cashflows
                .iter()
                .map(|cf| (cf.year, cf.cumulative_discounted)),
            GREEN.stroke_width(3),
        ))?
        .label("Cumulative discounted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// A Gantt-style timeline of the phase schedule, including the deliberate
/// overlaps between the earthworks, tailings/WRD and water tracks.
fn plot_phase_timeline(output_dir: &str, input: &InputState, results: &Results) -> Result<()> {
    let path = format!("{}/3_phase_timeline.png", output_dir);
    let root_area = BitMapBackend::new(&path, (1280, 720)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.titled("Closure Phase Timeline", ("sans-serif", 40))?;

    let drawing_area = root_area.margin(20, 20, 60, 20);

    let chart_left = 360;
    let chart_width = 860.0;
    let row_height = 56;
    let bar_height = 34;
    let top_offset = 90;

    let total_years = results.schedule.total_duration_years.max(1) as f64;
    let px_per_year = chart_width / total_years;

    let label_style = TextStyle::from(("sans-serif", 18).into_font()).color(&BLACK);
    let tick_style = TextStyle::from(("sans-serif", 14).into_font()).color(&BLACK);
    let bar_color = RGBColor(70, 130, 180);

    // Year gridlines, thinned out on long programmes.
    let tick_step = ((total_years / 20.0).ceil() as u32).max(1);
    let axis_bottom = top_offset + ClosurePhase::ALL.len() as i32 * row_height;
    let mut year = 0u32;
    while year <= results.schedule.total_duration_years {
        let x = chart_left + (f64::from(year) * px_per_year) as i32;
        drawing_area.draw(&PathElement::new(
            vec![(x, top_offset - 10), (x, axis_bottom)],
            BLACK.mix(0.2).stroke_width(1),
        ))?;
        let year_label = format!("{}", input.financial.closure_start_year + year as i32);
        drawing_area.draw_text(&year_label, &tick_style, (x - 18, axis_bottom + 8))?;
        year += tick_step;
    }

    for (i, phase) in ClosurePhase::ALL.iter().enumerate() {
        let y = top_offset + i as i32 * row_height;
        drawing_area.draw_text(phase.display_name(), &label_style, (20, y + 8))?;

        let start = results.schedule.start_year(*phase);
        let duration = input.phase_durations.duration(*phase);
        let x0 = chart_left + (f64::from(start) * px_per_year) as i32;
        // Zero-duration phases still get a sliver so they stay visible.
        let width = ((f64::from(duration) * px_per_year) as i32).max(3);

        drawing_area.draw(&Rectangle::new(
            [(x0, y), (x0 + width, y + bar_height)],
            ShapeStyle {
                color: bar_color.into(),
                filled: true,
                stroke_width: 1,
            },
        ))?;
    }

    root_area.present()?;
    Ok(())
}

/// Horizontal bars of the category breakdown, largest category first.
fn plot_category_breakdown(output_dir: &str, results: &Results) -> Result<()> {
    let path = format!("{}/4_category_breakdown.png", output_dir);
    let root_area = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.titled("Cost by Category", ("sans-serif", 40))?;

    let drawing_area = root_area.margin(20, 20, 60, 20);

    if results.category_breakdown.is_empty() {
        return Ok(());
    }

    let chart_left = 320;
    let chart_width = 560.0;
    let row_height = 34;
    let bar_height = 22;
    let top_offset = 80;

    let max_cost = results
        .category_breakdown
        .first()
        .map_or(1.0, |row| row.total_cost)
        .max(1.0);

    let label_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
    let colors = [
        RGBColor(70, 130, 180),
        RGBColor(60, 160, 110),
        RGBColor(200, 130, 60),
        RGBColor(160, 90, 170),
    ];

    for (i, row) in results.category_breakdown.iter().enumerate() {
        let y = top_offset + i as i32 * row_height;
        drawing_area.draw_text(row.category.display_name(), &label_style, (20, y + 4))?;

        let width = ((row.total_cost / max_cost * chart_width) as i32).max(2);
        let color = colors[i % colors.len()];
        drawing_area.draw(&Rectangle::new(
            [(chart_left, y), (chart_left + width, y + bar_height)],
            ShapeStyle {
                color: color.into(),
                filled: true,
                stroke_width: 1,
            },
        ))?;

        let value_label = format!("${:.0} ({:.1}%)", row.total_cost, row.percent_of_total);
        drawing_area.draw_text(
            &value_label,
            &label_style,
            (chart_left + width + 8, y + 4),
        )?;
    }

    root_area.present()?;
    Ok(())
}
