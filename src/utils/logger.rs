use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `json` 為 true 時改用 JSON 輸出，供 CI / 日誌收集使用
pub fn init_cli_logger(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "course_catalog=debug,info"
    } else {
        "course_catalog=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 兩個分支各自建立 builder：同一個 layer 值無法同時用於堆疊中的兩個位置
    macro_rules! base_layer {
        () => {
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
        };
    }

    let (json_layer, compact_layer) = if json {
        (Some(base_layer!().json()), None)
    } else {
        (None, Some(base_layer!().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}
