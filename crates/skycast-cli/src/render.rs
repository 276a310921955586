//! Plain-text rendering of the view model.
//!
//! The view model arrives display-ready; this module only decides layout.

use skycast_weather::ViewModel;

pub fn print_view_model(view: &ViewModel) {
    println!("{}", view.location_label);
    println!("{}", view.date_label);
    println!();
    println!("{}  {}", view.description_label, view.primary_temperature);
    println!();
    println!("Humidity    {}", view.humidity_percent);
    println!("Wind        {}", view.wind_speed_label);
    println!("UV Index    {}", view.uv_index);
    println!("Feels Like  {}", view.feels_like_label);
    println!();
    println!("Daily forecast");
    for entry in &view.daily_entries {
        println!(
            "  {:<5} {:<28} {:>5} / {}",
            entry.day_label, entry.description, entry.high_label, entry.low_label
        );
    }
    println!();
    println!("Hourly forecast");
    for entry in &view.hourly_entries {
        println!(
            "  {:<6} {:<28} {:>5}",
            entry.time_label, entry.description, entry.temperature_label
        );
    }
}
