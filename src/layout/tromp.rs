//! Tromp diagram layout.
//!
//! Abstractions are horizontal bars, variables are vertical stems hanging
//! from the bar of their binder, and applications join the roots of their
//! two sides with a horizontal bar below both.
//!
//! A figure's origin is its top-left corner. A variable is a zero-height
//! figure whose stem reaches `index + 1` rows above its origin, which lands
//! on its binder's bar once the enclosing abstractions have shifted it
//! down one row each.

use crate::syntax::types::{Abstraction, Application, Term, Variable};

use super::types::{DiagramFigure, LineSegment};

/// Lay out a resolved term.
pub fn layout(term: &Term) -> DiagramFigure {
    match term {
        Term::Variable(var) => variable(var),
        Term::Abstraction(abs) => abstraction(abs),
        Term::Application(app) => application(app),
    }
}

fn variable(var: &Variable) -> DiagramFigure {
    // Free variables get a one-row stem, as if bound just above the figure.
    let reach = var.debruijn_index.map_or(1, |index| index as i64 + 1);
    DiagramFigure::new(vec![LineSegment::vertical(0, 0, -reach)], 1, 0)
}

fn abstraction(abs: &Abstraction) -> DiagramFigure {
    let body = layout(&abs.body);
    let (width, height) = (body.width_units, body.height_units + 1);

    let mut segments = Vec::with_capacity(body.segments.len() + 1);
    segments.push(LineSegment::horizontal(0, 0, width));
    segments.extend(body.translated(0, 1));
    DiagramFigure::new(segments, width, height)
}

fn application(app: &Application) -> DiagramFigure {
    let function = layout(&app.function);
    let argument = layout(&app.argument);
    let (w1, h1) = (function.width_units, function.height_units);
    let (w2, h2) = (argument.width_units, argument.height_units);
    let arg_x = w1 + 1;
    let bar_y = h1.max(h2);

    let mut segments = Vec::with_capacity(function.segments.len() + argument.segments.len() + 4);

    // Extend the shorter side's root down to the bar.
    if h1 < bar_y {
        segments.push(LineSegment::vertical(0, h1, bar_y));
    }
    if h2 < bar_y {
        segments.push(LineSegment::vertical(arg_x, h2, bar_y));
    }

    segments.push(LineSegment::horizontal(bar_y, 0, arg_x));

    let drops = [
        LineSegment::vertical(0, bar_y, (h1 - 1).max(0)),
        LineSegment::vertical(arg_x, bar_y, (h2 - 1).max(0)),
    ];
    segments.extend(drops.into_iter().filter(|drop| !drop.is_degenerate()));

    segments.extend(function.segments);
    segments.extend(argument.translated(arg_x, 0));

    DiagramFigure::new(segments, w1 + w2 + 1, bar_y + 1)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_tromp.rs"]
mod tests;
