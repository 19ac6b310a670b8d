use crossline_core::controller::{
    ClickOutcome, Controller, EventOutcome, Intersection, Phase, SweepOutcome,
};
use crossline_core::geom::{Point, Segment};
use crossline_core::input::InputEvent;
use crossline_core::surface::{DrawCommand, RecordingSurface, Style};

fn click(ctl: &mut Controller, surface: &mut RecordingSurface, x: f64, y: f64) -> ClickOutcome {
    ctl.on_click(Point::new(x, y), surface)
}

fn draw(
    ctl: &mut Controller,
    surface: &mut RecordingSurface,
    a: (f64, f64),
    b: (f64, f64),
) -> ClickOutcome {
    click(ctl, surface, a.0, a.1);
    click(ctl, surface, b.0, b.1)
}

#[test]
fn starts_idle_and_empty() {
    let ctl = Controller::new();
    assert_eq!(Phase::Idle, ctl.phase());
    assert!(ctl.state().is_empty());
}

#[test]
fn two_clicks_make_one_segment() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    assert_eq!(ClickOutcome::Started, click(&mut ctl, &mut surface, 1.0, 2.0));
    assert_eq!(Phase::Pending, ctl.phase());
    assert_eq!(Some(Point::new(1.0, 2.0)), ctl.state().pending_start());
    assert!(ctl.state().segments().is_empty());

    let outcome = click(&mut ctl, &mut surface, 3.0, 4.0);
    assert_eq!(
        ClickOutcome::Completed {
            segment: 0,
            sweep: SweepOutcome::default()
        },
        outcome
    );
    assert_eq!(Phase::Idle, ctl.phase());
    assert_eq!(None, ctl.state().pending_start());
    assert_eq!(
        &[Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0))],
        ctl.state().segments()
    );

    assert_eq!(
        vec![
            DrawCommand::Point {
                at: Point::new(1.0, 2.0),
                style: Style::StartMarker
            },
            DrawCommand::Point {
                at: Point::new(3.0, 4.0),
                style: Style::Vertex
            },
            DrawCommand::Line {
                from: Point::new(1.0, 2.0),
                to: Point::new(3.0, 4.0),
                style: Style::Stroke
            },
        ],
        surface.commands
    );
}

#[test]
fn sweep_only_appends() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    draw(&mut ctl, &mut surface, (0.0, 0.0), (10.0, 0.0));
    assert!(ctl.state().intersections().is_empty());

    draw(&mut ctl, &mut surface, (5.0, -5.0), (5.0, 5.0));
    assert_eq!(1, ctl.state().intersections().len());
    let first = ctl.state().intersections()[0];
    assert_eq!(
        Intersection {
            at: Point::new(5.0, 0.0),
            earlier: 0,
            newer: 1
        },
        first
    );

    let outcome = draw(&mut ctl, &mut surface, (0.0, -2.0), (10.0, 8.0));
    assert_eq!(
        ClickOutcome::Completed {
            segment: 2,
            sweep: SweepOutcome { found: 2, parallel: 0 }
        },
        outcome
    );

    let found = ctl.state().intersections();
    assert_eq!(3, found.len());
    assert_eq!(first, found[0]);
    assert_eq!((0, 2), (found[1].earlier, found[1].newer));
    assert_eq!(Point::new(2.0, 0.0), found[1].at);
    assert_eq!((1, 2), (found[2].earlier, found[2].newer));
    assert_eq!(Point::new(5.0, 3.0), found[2].at);
}

#[test]
fn parallel_pair_does_not_stop_the_sweep() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    draw(&mut ctl, &mut surface, (0.0, 0.0), (10.0, 0.0));
    draw(&mut ctl, &mut surface, (3.0, -5.0), (3.0, 5.0));
    let outcome = draw(&mut ctl, &mut surface, (0.0, 7.0), (10.0, 7.0));

    assert_eq!(
        ClickOutcome::Completed {
            segment: 2,
            sweep: SweepOutcome { found: 1, parallel: 1 }
        },
        outcome
    );
    let points: Vec<Point> = ctl.state().intersection_points().collect();
    assert_eq!(vec![Point::new(3.0, 0.0), Point::new(3.0, 7.0)], points);
}

#[test]
fn equal_crossings_are_kept_twice() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    draw(&mut ctl, &mut surface, (0.0, 0.0), (10.0, 0.0));
    draw(&mut ctl, &mut surface, (0.0, -5.0), (10.0, 5.0));
    draw(&mut ctl, &mut surface, (5.0, -5.0), (5.0, 5.0));

    let points: Vec<Point> = ctl.state().intersection_points().collect();
    assert_eq!(3, points.len());
    assert_eq!(Point::new(5.0, 0.0), points[1]);
    assert_eq!(Point::new(5.0, 0.0), points[2]);
}

#[test]
fn crossings_are_signalled_as_highlighted_points() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    draw(&mut ctl, &mut surface, (0.0, 0.0), (4.0, 4.0));
    surface.take();
    draw(&mut ctl, &mut surface, (0.0, 4.0), (4.0, 0.0));

    assert_eq!(
        Some(&DrawCommand::Point {
            at: Point::new(2.0, 2.0),
            style: Style::Intersection
        }),
        surface.commands.last()
    );
}

#[test]
fn cancel_drops_the_pending_start() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    draw(&mut ctl, &mut surface, (0.0, 0.0), (10.0, 0.0));
    click(&mut ctl, &mut surface, 7.0, 7.0);
    surface.take();

    assert!(ctl.on_cancel(&mut surface));
    assert_eq!(Phase::Idle, ctl.phase());
    assert_eq!(None, ctl.state().pending_start());
    assert_eq!(1, ctl.state().segments().len());
    assert_eq!(
        vec![DrawCommand::Erase {
            at: Point::new(7.0, 7.0),
            style: Style::StartMarker
        }],
        surface.commands
    );

    // The next click starts a fresh segment.
    assert_eq!(ClickOutcome::Started, click(&mut ctl, &mut surface, 1.0, 1.0));
}

#[test]
fn cancel_while_idle_does_nothing() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();
    draw(&mut ctl, &mut surface, (0.0, 0.0), (10.0, 0.0));
    let before = ctl.state().clone();
    surface.take();

    assert!(!ctl.on_cancel(&mut surface));
    assert_eq!(&before, ctl.state());
    assert!(surface.commands.is_empty());
}

#[test]
fn reset_clears_everything() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();
    draw(&mut ctl, &mut surface, (0.0, 0.0), (4.0, 4.0));
    draw(&mut ctl, &mut surface, (0.0, 4.0), (4.0, 0.0));
    click(&mut ctl, &mut surface, 9.0, 9.0);
    surface.take();

    ctl.reset(&mut surface);
    assert_eq!(Phase::Idle, ctl.phase());
    assert!(ctl.state().is_empty());
    assert_eq!(vec![DrawCommand::Clear], surface.commands);
}

#[test]
fn dispatch_routes_gestures() {
    let mut ctl = Controller::new();
    let mut surface = RecordingSurface::new();

    let started = ctl.dispatch(InputEvent::primary(Point::new(1.0, 1.0)), &mut surface);
    assert_eq!(EventOutcome::Click(ClickOutcome::Started), started);
    let cancelled = ctl.dispatch(InputEvent::secondary(Point::new(50.0, 50.0)), &mut surface);
    assert_eq!(EventOutcome::Cancel(true), cancelled);
    let idle_cancel = ctl.dispatch(InputEvent::secondary(Point::new(0.0, 0.0)), &mut surface);
    assert_eq!(EventOutcome::Cancel(false), idle_cancel);
    assert_eq!(EventOutcome::Reset, ctl.dispatch(InputEvent::Reset, &mut surface));
}
