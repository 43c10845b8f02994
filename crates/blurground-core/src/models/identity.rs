//! 페이지 식별자.
//!
//! 페이지 정규 URL의 32비트 롤링 해시. 캐시 키로만 사용되며,
//! 서로 다른 URL 간 해시 충돌은 수용된 확률적 한계다 — 별도 구분 처리 없음.

/// 페이지 식별자 — 위치 문자열의 32비트 부호 있는 해시
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageIdentity(i32);

/// 저장 키 접두사 (레거시 레이아웃 고정)
const STORAGE_KEY_PREFIX: &str = "ocanvas";

impl PageIdentity {
    /// 위치 문자열에서 식별자 계산.
    ///
    /// UTF-16 코드 유닛 단위로 `h = h*31 + c`를 32비트 부호 있는
    /// 랩어라운드로 누적한다 (`(h << 5) - h + c` 동치).
    pub fn from_location(location: &str) -> Self {
        let mut hash: i32 = 0;
        for unit in location.encode_utf16() {
            hash = hash
                .wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(unit as i32);
        }
        Self(hash)
    }

    /// 해시 원시값
    pub fn value(&self) -> i32 {
        self.0
    }

    /// 영속 저장소 키: `"ocanvas" + 해시` (십진수, 부호 포함)
    pub fn storage_key(&self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", self.0)
    }
}
