//! HTML projection of an overlay snapshot.
//!
//! The page is meant to be loaded by a broadcast tool's browser source, so the
//! background stays almost fully transparent and the page can reload itself.

use super::overlay::Snapshot;

/// Default seconds between browser-side reloads of the overlay page.
pub const DEFAULT_REFRESH_SECS: u32 = 2;

const BALANCE_SLOT: &str = "{{balance}}";
const PNL_SLOT: &str = "{{pnl}}";
const REFRESH_SLOT: &str = "{{refresh}}\n";

const OVERLAY_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{{refresh}}
<title>Wallet Overlay</title>
<style>
body {
    font-family: 'Cinzel', serif;
    background: rgba(255, 255, 255, 0.02);
    color: white;
    display: flex;
    justify-content: center;
    align-items: center;
    height: 100vh;
    margin: 0;
}
.overlay {
    background: rgba(255, 255, 255, 0.02);
    padding: 10px;
    border-radius: 10px;
    text-align: center;
    display: inline-block;
}
.title {
    font-size: 14px;
    font-weight: 300;
    margin: 0 15px;
    display: inline-block;
}
.balance-number, .pnl-number {
    font-size: 20px;
    font-weight: bold;
    margin-top: 5px;
}
.pnl-title, .pnl-number {
    color: #32CD32;
}
.logo {
    height: 14px;
    vertical-align: middle;
}
</style>
</head>
<body>
<div class="overlay">
<div class="title">BALANCE:<br><span class="balance-number" id="balance">{{balance}} <span class="logo">&#9678;</span></span></div>
<div class="title pnl-title">PNL:<br><span class="pnl-number" id="pnl">{{pnl}} <span class="logo">&#9678;</span></span></div>
</div>
</body>
</html>
"#;

/// Render the overlay page for `snapshot`, reloading every `refresh_secs`
/// seconds. Zero leaves the refresh tag out.
///
/// Values appear in canonical decimal form; decimals cannot contain markup,
/// so no escaping is needed.
pub fn render(snapshot: &Snapshot, refresh_secs: u32) -> String {
    let refresh_meta = if refresh_secs == 0 {
        String::new()
    } else {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            refresh_secs
        )
    };

    OVERLAY_TEMPLATE
        .replace(REFRESH_SLOT, &refresh_meta)
        .replace(BALANCE_SLOT, &snapshot.balance.to_canonical_string())
        .replace(PNL_SLOT, &snapshot.pnl.to_canonical_string())
}
