/// ルート構成モジュール
///
/// URLパスと認証状態からページを決定する純粋なマッピングです。
/// 認証済み・未認証の二分割のみで、ロールベースの制御は行いません。
use log::debug;

/// アプリケーションのページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// ダッシュボード（認証済みのホーム）
    Dashboard,
    /// レシートアップロード
    Upload,
    /// 設定
    Settings,
    /// 公開ダッシュボード（未認証のホーム）
    PublicDashboard,
    /// ログイン
    Login,
}

/// パスと認証状態からページを解決する
///
/// # ルート規則
/// - 認証済み: `/`→ダッシュボード、`/upload`→アップロード、
///   `/settings`→設定、それ以外→ダッシュボード
/// - 未認証: `/`→公開ダッシュボード、`/login`→ログイン、それ以外→ログイン
pub fn resolve_route(path: &str, is_authenticated: bool) -> Page {
    let normalized = normalize_path(path);

    let page = if is_authenticated {
        match normalized {
            "/" => Page::Dashboard,
            "/upload" => Page::Upload,
            "/settings" => Page::Settings,
            _ => Page::Dashboard,
        }
    } else {
        match normalized {
            "/" => Page::PublicDashboard,
            "/login" => Page::Login,
            _ => Page::Login,
        }
    };

    debug!("ルート解決: path={path}, is_authenticated={is_authenticated} -> {page:?}");
    page
}

/// パスを正規化する（クエリ・フラグメント・末尾スラッシュを除去）
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
