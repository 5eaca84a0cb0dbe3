#![no_main]

use libfuzzer_sys::fuzz_target;
use nestset::{InMemoryRowSource, ManagerConfig, MenuManager, NodeId};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(source) = InMemoryRowSource::from_json_str(content) else {
        return;
    };

    // Any snapshot either loads or fails with an error
    let config = ManagerConfig::default().with_autoload(true);
    if let Ok(menus) = MenuManager::new(source, &config) {
        let _ = menus.dropdown(NodeId::DEFAULT);
        let _ = menus.search_entries("");
    }
});
