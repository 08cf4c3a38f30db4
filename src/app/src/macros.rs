/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// Renders only when at least one field actually changed.
///
/// # Examples
///
/// ```ignore
/// update_field!(model.csv_export, None)
///
/// update_field!(
///     model.csrf_token, token;
///     model.submit_enabled, false
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}
