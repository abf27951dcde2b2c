/// Asserts that the provided block panics. When given a message fragment, the panic payload must
/// also contain it, which lets tests tell apart the typed errors thrown by the crate.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(move || $run).is_err(), "assertion failed to panic");
        println!("^ panic caught");
    };
    ($run:block, $fragment:literal) => {
        let payload = std::panic::catch_unwind(move || $run)
            .expect_err("assertion failed to panic");
        let message = payload.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($fragment),
            "panic message {:?} doesn't contain {:?}", message, $fragment
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
