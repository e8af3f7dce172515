//! Sweep example.
//!
//! Loads a driver and motor layout from TOML, then sweeps the motor back and
//! forth in both stepping modes and prints the phase pattern the H-bridge
//! sees on every step.
//!
//! The pins are in-memory stand-ins, so this runs without real hardware.

use std::cell::RefCell;
use std::rc::Rc;

use hybrid_stepper::{
    parse_config, Degrees, MotorController, MoveRegistry, PinLines, StepMode, StepPlan,
};

/// Delay provider that actually sleeps.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Output pin that mirrors its level into a shared bank for printing.
struct BankPin {
    bank: Rc<RefCell<[bool; 4]>>,
    index: usize,
}

impl embedded_hal::digital::ErrorType for BankPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for BankPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bank.borrow_mut()[self.index] = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bank.borrow_mut()[self.index] = false;
        Ok(())
    }
}

fn render(levels: [bool; 4]) -> String {
    levels.iter().map(|&on| if on { '#' } else { '.' }).collect()
}

const CONFIG: &str = r#"
[driver]
chip = "gpiochip0"
lines = [17, 18, 27, 22]

[motors.pan]
name = "Pan axis"
speed_steps_per_sec = 200.0
default_mode = "half"

[moves.nudge]
motor = "pan"
degrees = 4.5

[moves.back]
motor = "pan"
mode = "full"
degrees = -9.0

[sequences.wiggle]
motor = "pan"
steps = [
    { mode = "full", degrees = 3.6 },
    { degrees = -1.8 },
    { mode = "full", degrees = -1.8 },
]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Sweep Example ===\n");

    let config = parse_config(CONFIG)?;
    println!(
        "Driver: {} lines {:?}",
        config.driver.chip, config.driver.lines
    );

    let bank = Rc::new(RefCell::new([false; 4]));
    let pins = [0, 1, 2, 3].map(|index| BankPin {
        bank: Rc::clone(&bank),
        index,
    });

    let mut controller = MotorController::new(PinLines::new(pins), SleepDelay)?;
    let mut motor = controller.create_motor_from_config(&config, "pan")?;
    let registry = MoveRegistry::from_config(&config)?;

    println!("\n=== Plans ===");
    for mode in [StepMode::Full, StepMode::Half] {
        let plan = StepPlan::new(mode, Degrees(9.0), motor.speed());
        println!(
            "{:>4}: {} steps, {} us apart, {} us total",
            mode.name(),
            plan.steps,
            plan.delay_us,
            plan.estimated_duration_us()
        );
    }

    println!("\n=== Single steps ===");
    for mode in [StepMode::Full, StepMode::Half] {
        for _ in 0..mode.phase_count() {
            controller.drive(&mut motor, mode, mode.step_size())?;
            println!(
                "{:>4} phase {} -> {}",
                mode.name(),
                motor.last_step(),
                render(*bank.borrow())
            );
        }
    }

    println!("\n=== Named moves ===");
    for name in ["nudge", "back"] {
        controller.execute_move(&mut motor, name, &registry)?;
        println!("{name}: now at {:.1} deg", motor.position().0);
    }
    controller.run_sequence(&mut motor, "wiggle", &registry)?;
    println!("wiggle: now at {:.1} deg", motor.position().0);

    controller.stop(motor)?;
    println!("\nStopped, lines {}", render(*bank.borrow()));

    println!("\n=== Example Complete ===");
    Ok(())
}
