// src/main.rs
use nannou::prelude::*;

use pie_step::{config::Config, render::Renderer};

struct Model {
    renderer: Renderer,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to the defaults
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Config::default()
    });

    let renderer = Renderer::new(&config).unwrap_or_else(|e| {
        log::warn!("Invalid config, using defaults: {}", e);
        Renderer::new(&Config::default()).expect("Default config must be valid")
    });

    // Create window
    let mut builder = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch);
    if config.window.fullscreen {
        builder = builder.fullscreen();
    }
    builder.build().expect("Failed to create window");

    log::info!(
        "{} nodes, {}ms ticks, {:?} at chain ends",
        config.chain.nodes,
        config.animation.tick_interval_ms,
        config.chain.boundary
    );

    Model { renderer }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.renderer.handle_tap();
    }
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.renderer.handle_tap();
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.renderer.update(update.since_last.as_secs_f32());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.renderer.render(&draw, app.window_rect());
    draw.to_frame(app, &frame).unwrap();
}
