/// Defines a process-wide counter `next_<tag>_id()` handing out increasing ids.
///
/// Ids only label log lines; nothing in code generation depends on their value.
#[macro_export]
macro_rules! define_id_generator {
    ($tag:ident$(, $visual:vis)?) => {
        ::paste::paste! {
            static [<$tag:upper _ID_GENERATOR>]: ::std::sync::atomic::AtomicU32 =
                ::std::sync::atomic::AtomicU32::new(0);

            $($visual)* fn [<next_ $tag _id>]() -> u32 {
                [<$tag:upper _ID_GENERATOR>].fetch_add(1, ::std::sync::atomic::Ordering::Relaxed)
            }
        }
    };
}
