#![no_std]
#![no_main]

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use stm32f0xx_hal::{
    delay::Delay,
    gpio::{gpiob, Output, PushPull},
    pac::{self, interrupt, Interrupt},
    prelude::*,
    time::Hertz,
    timers::Timer,
};

use stm32f0_demos::hd44780::Hd44780;
use stm32f0_demos::periodic_timer::PeriodicTimer;

use lcd_stopwatch::{
    with_both, GlyphTable, InterruptShared, ProgressAnimator, Stopwatch, StopwatchConfig,
    TickAccumulator, TickOutcome, DEFAULT_GLYPH_COUNT,
};

/// Type alias for the LCD: RS on PB0, E on PB1, D4..D7 on PB4..PB7
pub type Lcd = Hd44780<
    gpiob::PB0<Output<PushPull>>,
    gpiob::PB1<Output<PushPull>>,
    gpiob::PB4<Output<PushPull>>,
    gpiob::PB5<Output<PushPull>>,
    gpiob::PB6<Output<PushPull>>,
    gpiob::PB7<Output<PushPull>>,
    Delay,
>;

/// State owned by the TIM2 interrupt
struct FastIrq {
    timer: PeriodicTimer<pac::TIM2>,
    tick: TickAccumulator,
}

/// State owned by the TIM3 interrupt
struct SlowIrq {
    timer: PeriodicTimer<pac::TIM3>,
    progress: ProgressAnimator,
}

static LCD: InterruptShared<Lcd> = InterruptShared::new();
static FAST: InterruptShared<FastIrq> = InterruptShared::new();
static SLOW: InterruptShared<SlowIrq> = InterruptShared::new();

/// Fast source, ~16 ms: count overflows, redraw the clock every sixth
#[interrupt]
fn TIM2() {
    with_both(&FAST, &LCD, |fast, lcd| {
        fast.timer.acknowledge();
        if let TickOutcome::Advanced(clock) = fast.tick.on_overflow(lcd) {
            if clock.tenths() == 0 {
                rprintln!(
                    "{:02}:{:02} secPwr {}",
                    clock.minutes(),
                    clock.seconds(),
                    fast.tick.sec_pwr()
                );
            }
        }
    });
}

/// Slow source, ~1 s: grow the progress bar
#[interrupt]
fn TIM3() {
    with_both(&SLOW, &LCD, |slow, lcd| {
        slow.timer.acknowledge();
        slow.progress.on_overflow(lcd);
    });
}

/// Configure the system clock (HSI, 8 MHz)
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure the LCD on port B and run its power-on initialisation
///
/// Uses SysTick for the busy-wait delays, so SysTick is not available as a
/// periodic source.
fn setup_lcd(
    pins: gpiob::Parts,
    syst: cortex_m::peripheral::SYST,
    rcc: &stm32f0xx_hal::rcc::Rcc,
) -> Lcd {
    let (rs, en, d4, d5, d6, d7) = cortex_m::interrupt::free(|cs| {
        (
            pins.pb0.into_push_pull_output(cs),
            pins.pb1.into_push_pull_output(cs),
            pins.pb4.into_push_pull_output(cs),
            pins.pb5.into_push_pull_output(cs),
            pins.pb6.into_push_pull_output(cs),
            pins.pb7.into_push_pull_output(cs),
        )
    });

    let delay = Delay::new(syst, rcc);
    let lcd = Hd44780::new(rs, en, (d4, d5, d6, d7), delay);

    rprintln!("LCD configured (PB0 RS, PB1 E, PB4..PB7 data)");
    lcd
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== LCD Stopwatch ===");
    rprintln!("Starting initialization...");

    let mut dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let mut lcd = setup_lcd(gpiob, cp.SYST, &rcc);

    // Real periods are set by Stopwatch::start
    let mut fast_timer = PeriodicTimer::new(Timer::tim2(dp.TIM2, Hertz(1), &mut rcc));
    let mut slow_timer = PeriodicTimer::new(Timer::tim3(dp.TIM3, Hertz(1), &mut rcc));

    let config = StopwatchConfig::default();
    let glyphs = GlyphTable::<DEFAULT_GLYPH_COUNT>::partial_blocks().unwrap();
    let handlers =
        Stopwatch::start(&config, &mut lcd, &glyphs, &mut fast_timer, &mut slow_timer).unwrap();

    rprintln!(
        "Timers armed: tick {} ms, progress {} ms",
        config.tick_period().as_millis(),
        config.progress_period().as_millis()
    );

    LCD.install(lcd);
    FAST.install(FastIrq {
        timer: fast_timer,
        tick: handlers.tick,
    });
    SLOW.install(SlowIrq {
        timer: slow_timer,
        progress: handlers.progress,
    });

    // SAFETY: both handlers only touch state installed above
    unsafe {
        NVIC::unmask(Interrupt::TIM3);
        NVIC::unmask(Interrupt::TIM2);
    }

    rprintln!("=== Running ===");

    loop {
        cortex_m::asm::wfi();
    }
}
