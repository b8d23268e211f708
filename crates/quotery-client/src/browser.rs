use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::Instant;

use quotery_core::error::AppError;
use quotery_core::traits::PageSource;

/// How often the readiness poll re-queries the DOM.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Hard ceiling on the initial navigation.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// A live headless-Chromium session parked on the quote listing.
///
/// One session drives one ingestion run: the pipeline reads the rendered
/// DOM, clicks through the pagination control, and releases the browser
/// when it is done (or when the run aborts).
///
/// Requires a Chromium / Chrome binary reachable via `$PATH` (or the
/// default locations checked by `chromiumoxide`); `CHROME_BIN` overrides
/// the lookup.
pub struct BrowserPage {
    browser: Browser,
    page: Page,
    /// Selector for the pagination control, `li.next > a` on the
    /// default listing.
    next_selector: String,
}

impl BrowserPage {
    /// Launch a headless browser and navigate to the listing's first page.
    pub async fn open(url: &str) -> Result<Self, AppError> {
        Self::open_with_next_selector(url, "li.next > a").await
    }

    /// Like [`BrowserPage::open`], with a custom next-page selector.
    pub async fn open_with_next_selector(
        url: &str,
        next_selector: &str,
    ) -> Result<Self, AppError> {
        let mut builder = BrowserConfig::builder();
        builder = builder.no_sandbox().disable_default_args();

        // Snap-packaged Chromium exposes a wrapper that rejects standard
        // Chrome CLI flags (--headless, --disable-gpu, …), so prefer the
        // real binary when we can find one.
        if let Some(bin) = Self::find_chrome_binary() {
            tracing::info!("Using Chrome binary: {}", bin.display());
            builder = builder.chrome_executable(bin);
        }

        let config = builder
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-popup-blocking")
            .arg("--disable-translate")
            .arg("--no-first-run")
            .build()
            .map_err(|e| AppError::BrowserError(format!("Browser config error: {e}")))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| AppError::BrowserError(format!("Failed to launch browser: {e}")))?;

        // The CDP handler must be polled continuously for the connection to work.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    tracing::warn!("Browser CDP handler error: {event:?}");
                    break;
                }
            }
        });

        // Do not leak the Chromium process when the listing never loads.
        let page = match tokio::time::timeout(NAVIGATION_TIMEOUT, browser.new_page(url)).await {
            Ok(Ok(page)) => page,
            Ok(Err(e)) => {
                let _ = browser.close().await;
                return Err(AppError::BrowserError(format!(
                    "Failed to navigate to {url}: {e}"
                )));
            }
            Err(_) => {
                let _ = browser.close().await;
                return Err(AppError::Timeout(NAVIGATION_TIMEOUT.as_secs()));
            }
        };

        Ok(Self {
            browser,
            page,
            next_selector: next_selector.to_string(),
        })
    }

    /// Tries to locate the real Chrome/Chromium binary.
    ///
    /// On systems where Chromium is installed via **snap**, the wrapper at
    /// `/snap/bin/chromium` strips unknown CLI flags, breaking headless
    /// mode. We look for the real binary inside the snap first, then fall
    /// back to well-known system paths. If nothing is found we return
    /// `None` and let `chromiumoxide` do its own lookup.
    fn find_chrome_binary() -> Option<PathBuf> {
        let candidates: &[&str] = &[
            // Snap (Ubuntu default)
            "/snap/chromium/current/usr/lib/chromium-browser/chrome",
            // Flatpak
            "/var/lib/flatpak/exports/bin/org.chromium.Chromium",
            // Common apt / manual installs
            "/usr/bin/google-chrome-stable",
            "/usr/bin/google-chrome",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
        ];

        // Also honour an explicit override via env var.
        if let Ok(p) = std::env::var("CHROME_BIN") {
            let path = PathBuf::from(&p);
            if path.exists() {
                return Some(path);
            }
        }

        candidates.iter().map(PathBuf::from).find(|p| p.exists())
    }
}

impl PageSource for BrowserPage {
    async fn content(&self) -> Result<String, AppError> {
        self.page
            .content()
            .await
            .map_err(|e| AppError::BrowserError(format!("Failed to read page content: {e}")))
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<bool, AppError> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn advance(&self) -> Result<bool, AppError> {
        // A missing control is the normal last-page condition, not an error.
        let Ok(element) = self.page.find_element(self.next_selector.as_str()).await else {
            return Ok(false);
        };

        element.click().await.map_err(|e| {
            AppError::BrowserError(format!("Failed to activate next-page control: {e}"))
        })?;
        Ok(true)
    }

    async fn close(self) -> Result<(), AppError> {
        let Self {
            mut browser, page, ..
        } = self;

        let _ = page.close().await;
        browser
            .close()
            .await
            .map_err(|e| AppError::BrowserError(format!("Failed to close browser: {e}")))?;
        let _ = browser.wait().await;
        Ok(())
    }
}
