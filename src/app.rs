use crate::input::{map_key, Command};
use crate::physics::Stage;
use crate::render::{self, Terminal};
use crate::sim::Sim;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

const FRAME_BUDGET: Duration = Duration::from_millis(33);

pub(crate) fn run() -> Result<()> {
    let mut term = Terminal::begin()?;

    let stage = Stage {
        width: term.cols as f32,
        height: term.rows as f32,
    };
    let mut sim = Sim::new(stage, rand::random());

    render::draw_splash(&mut term);
    term.present()?;
    wait_for_key()?;

    let mut last = Instant::now();
    let mut quit = false;

    while !quit {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            let Event::Key(k) = event::read()? else {
                continue;
            };
            if k.kind != KeyEventKind::Press && k.kind != KeyEventKind::Repeat {
                continue;
            }
            match map_key(k.code) {
                Some(Command::Quit) => {
                    quit = true;
                    break;
                }
                Some(cmd) => sim.apply(cmd),
                None => {}
            }
        }

        // wall-clock step, clamped so a stall cannot launch the blob
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;

        sim.step(dt);

        render::draw_frame(&mut term, &sim);
        term.present()?;

        let spent = frame_start.elapsed();
        if spent < FRAME_BUDGET {
            std::thread::sleep(FRAME_BUDGET - spent);
        }
    }

    term.end()
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
