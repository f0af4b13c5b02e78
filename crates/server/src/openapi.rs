use utoipa::OpenApi;

use shared_types::{
    AddCasePartyRequest, AppError, AppErrorKind, CaseDetailResponse, CasePartyResponse,
    CaseResponse, CreateCaseRequest, CreateHearingRequest, CreatePartyRequest, HearingResponse,
    JudgeOptionResponse, PartyResponse, UpdateCaseRequest, UpdateHearingRequest,
    UpdatePartyRequest,
};

/// OpenAPI document for the REST surface, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::rest::case::list_cases,
        crate::rest::case::get_case,
        crate::rest::case::create_case,
        crate::rest::case::update_case,
        crate::rest::case::delete_case,
        crate::rest::judge::list_judges,
        crate::rest::party::list_parties,
        crate::rest::party::get_party,
        crate::rest::party::create_party,
        crate::rest::party::update_party,
        crate::rest::party::delete_party,
        crate::rest::hearing::create_hearing,
        crate::rest::hearing::update_hearing,
        crate::rest::hearing::delete_hearing,
        crate::rest::case_party::add_party_to_case,
        crate::rest::case_party::remove_party_from_case,
        crate::health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        CaseResponse,
        CaseDetailResponse,
        CreateCaseRequest,
        UpdateCaseRequest,
        JudgeOptionResponse,
        PartyResponse,
        CreatePartyRequest,
        UpdatePartyRequest,
        HearingResponse,
        CreateHearingRequest,
        UpdateHearingRequest,
        CasePartyResponse,
        AddCasePartyRequest,
        crate::health::HealthResponse,
    )),
    tags(
        (name = "cases", description = "Court case management"),
        (name = "judges", description = "Judge lookup"),
        (name = "parties", description = "Party management"),
        (name = "hearings", description = "Hearings under a case"),
        (name = "case-parties", description = "Party-to-case links"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
