use chrono::{DateTime, Utc};
use colored::Colorize;
use recipebook::api::{CmdMessage, MessageLevel};
use recipebook::model::Recipe;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const VEG_MARKER: &str = "🌱";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_full_recipes(recipes: &[Recipe]) {
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("#{}", recipe.id).yellow(),
            recipe.name.bold()
        );
        println!(
            "{} · serves {}",
            if recipe.vegetarian {
                "vegetarian"
            } else {
                "not vegetarian"
            },
            recipe.servings
        );
        println!("--------------------------------");
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient);
        }
        if !recipe.ingredients.is_empty() {
            println!();
        }
        println!("{}", recipe.instructions);
    }
}

pub(crate) fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    let id_width = recipes
        .iter()
        .map(|r| format!("#{}. ", r.id).width())
        .max()
        .unwrap_or(0);

    for recipe in recipes {
        let id_str = format!("{:<width$}", format!("#{}. ", recipe.id), width = id_width);
        let marker = if recipe.vegetarian {
            format!("{} ", VEG_MARKER)
        } else {
            "   ".to_string()
        };
        let serves = format!("  x{}", recipe.servings);
        let time_ago = format_time_ago(recipe.created_at);

        let ingredients = recipe
            .ingredients
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let summary = if ingredients.is_empty() {
            recipe.name.clone()
        } else {
            format!("{} ({})", recipe.name, ingredients)
        };

        let fixed_width = id_str.width() + marker.width() + serves.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary.width());

        println!(
            "{}{}{}{}{}{}",
            id_str.yellow(),
            marker,
            summary,
            " ".repeat(padding),
            serves.dimmed(),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
