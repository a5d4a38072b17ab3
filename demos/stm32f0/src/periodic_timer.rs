use embedded_hal::timer::CountDown;
use lcd_stopwatch::{Period, PeriodicSource};
use stm32f0xx_hal::time::Hertz;
use stm32f0xx_hal::timers::{Event, Timer};

/// A general-purpose timer used as a stopwatch periodic source.
///
/// The timer's update interrupt is the overflow event. The interrupt routine
/// must call [`acknowledge`](Self::acknowledge) or the interrupt fires again
/// immediately.
pub struct PeriodicTimer<TIM> {
    timer: Timer<TIM>,
}

impl<TIM> PeriodicTimer<TIM>
where
    Timer<TIM>: CountDown<Time = Hertz>,
{
    pub fn new(timer: Timer<TIM>) -> Self {
        Self { timer }
    }

    /// Clears the pending update flag.
    pub fn acknowledge(&mut self) {
        self.timer.wait().ok();
    }
}

macro_rules! periodic_source {
    ($($TIM:ident,)+) => {
        $(
            impl PeriodicSource for PeriodicTimer<stm32f0xx_hal::pac::$TIM> {
                fn configure(&mut self, period: Period) {
                    // The HAL takes a rate; 16 ms rounds to 62 Hz (16.1 ms).
                    let hertz = period.as_hertz().unwrap_or(1).max(1);
                    self.timer.start(Hertz(hertz));
                }

                fn enable(&mut self) {
                    self.timer.listen(Event::TimeOut);
                }
            }
        )+
    };
}

periodic_source!(TIM2, TIM3,);
