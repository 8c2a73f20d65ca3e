//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync, time};

use crate::Ulid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("ulid: could not lock global generator")
}

/// Generates a ULID object.
///
/// This function employs a process-wide global random number generator seeded
/// from the operating system. On Unix, it reseeds the generator when the
/// process ID changes (i.e., upon process forks) to prevent collisions across
/// processes.
///
/// # Panics
///
/// Panics if the system clock reads earlier than the Unix epoch.
///
/// # Examples
///
/// ```rust
/// let x = ulid::ulid();
/// println!("{}", x); // e.g., "01ARZ3NDEKTSV4RRFFQ69G5FAV"
/// println!("{:?}", x.as_bytes()); // as 16-byte big-endian array
///
/// let ulid_string: String = ulid::ulid().to_string();
/// ```
pub fn ulid() -> Ulid {
    Ulid::new(time::SystemTime::now(), lock_global_gen().get_mut())
        .expect("ulid: clock may have gone backwards")
}

/// Generates a ULID object, returning the 26-character string representation
/// directly.
///
/// # Examples
///
/// ```rust
/// let s = ulid::ulid_string();
/// assert_eq!(s.len(), 26);
/// ```
pub fn ulid_string() -> String {
    ulid().to_string()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with
    /// [`ReseedingRng`] wrapper to emulate the strategy used by
    /// [`rand::rngs::ThreadRng`].
    pub type GlobalGenRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// A thin wrapper to reseed the generator when the process ID changes
    /// (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        rng: GlobalGenRng,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let prng = ChaCha12Core::from_rng(OsRng)
                .expect("ulid: could not initialize global generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                rng: ReseedingRng::new(prng, 1024 * 64, OsRng),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner random number generator,
        /// reseting the state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut GlobalGenRng {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.rng
        }
    }
}
