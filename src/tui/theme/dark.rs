use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "dark";

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	filler: Style::new().fg(Color::Rgb(7, 54, 66)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(131, 148, 150)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	notice: Style::new().fg(Color::Rgb(203, 75, 22)),
};
