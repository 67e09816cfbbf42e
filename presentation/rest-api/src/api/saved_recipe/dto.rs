use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SavedStatusResponse {
    pub id: u64,
    pub saved: bool,
}
