use super::*;

#[test]
fn url_joins_base_with_and_without_trailing_slash() {
    let ep = events::list();
    assert_eq!(ep.url("http://localhost:8087/api"), "http://localhost:8087/api/events");
    assert_eq!(ep.url("http://localhost:8087/api/"), "http://localhost:8087/api/events");
}

#[test]
fn display_renders_method_path_and_query() {
    assert_eq!(events::search_budget(10.0, 250.5).to_string(), "GET /events/search/budget?min=10&max=250.5");
    assert_eq!(users::signup().to_string(), "POST /users/signup");
}

#[test]
fn user_routes_are_keyed_by_email() {
    assert_eq!(users::by_email("ada@lab.org").path, "/users/ada@lab.org");
    let role = users::update_role("ada@lab.org", "ADMIN");
    assert_eq!(role.method, Method::Put);
    assert_eq!(role.path, "/users/ada@lab.org/role");
    assert_eq!(role.query, vec![("role", "ADMIN".to_owned())]);
    assert_eq!(users::upload("ada@lab.org").method, Method::Post);
    assert_eq!(users::upload_photo("a@b.c").path, "/users/a@b.c/photo");
    assert_eq!(users::enrolled_events("a@b.c").path, "/users/a@b.c/enrolled-events");
    assert_eq!(users::enrolled_projects("a@b.c").path, "/users/a@b.c/enrolled-projects");
}

#[test]
fn recent_uploads_defaults_to_a_week() {
    let ep = users::recent_uploads(users::DEFAULT_RECENT_DAYS);
    assert_eq!(ep.to_string(), "GET /users/uploads/recent?days=7");
}

#[test]
fn file_download_route_uses_filename() {
    assert_eq!(users::file("paper.pdf").path, "/users/uploads/paper.pdf");
}

#[test]
fn event_routes_cover_crud_and_enrollment() {
    assert_eq!(events::create().method, Method::Post);
    assert_eq!(events::update("e1").to_string(), "PUT /events/e1");
    assert_eq!(events::delete("e1").to_string(), "DELETE /events/e1");
    assert_eq!(events::enroll("e1", "u@x.io").to_string(), "POST /events/e1/enroll/u@x.io");
    assert_eq!(events::upcoming().path, "/events/upcoming");
}

#[test]
fn event_search_routes_use_backend_parameter_names() {
    assert_eq!(events::search_name("ai").to_string(), "GET /events/search/name?name=ai");
    assert_eq!(events::search_location("Sfax").to_string(), "GET /events/search/location?location=Sfax");
    assert_eq!(events::search_status("ONGOING").to_string(), "GET /events/search/status?status=ONGOING");
    assert_eq!(
        events::search_start_after("2025-01-01").to_string(),
        "GET /events/search/startAfter?start=2025-01-01"
    );
    assert_eq!(events::search_end_before("2025-02-01").to_string(), "GET /events/search/endBefore?end=2025-02-01");
    assert_eq!(
        events::search_date_range("2025-01-01", "2025-02-01").to_string(),
        "GET /events/search/dateRange?start=2025-01-01&end=2025-02-01"
    );
}

#[test]
fn project_routes_cover_membership_and_count() {
    assert_eq!(projects::add_member("p1", "u1").to_string(), "POST /projects/p1/addMember/u1");
    assert_eq!(projects::count().to_string(), "GET /projects/count");
    assert_eq!(projects::search_status("ACTIVE").to_string(), "GET /projects/search/status?status=ACTIVE");
}

#[test]
fn file_search_routes_use_date_parameter() {
    assert_eq!(files::search_date_after("2024-01-01").to_string(), "GET /files/search/dateAfter?date=2024-01-01");
    assert_eq!(files::search_date_before("2024-01-01").to_string(), "GET /files/search/dateBefore?date=2024-01-01");
    assert_eq!(files::types().path, "/file-types");
}

#[test]
fn admin_routes_pass_email_and_role_as_query() {
    assert_eq!(
        admin::approve("a@b.c", "PERMANENT").to_string(),
        "PUT /admin/users/approve?email=a@b.c&role=PERMANENT"
    );
    assert_eq!(admin::decline("a@b.c").to_string(), "PUT /admin/users/decline?email=a@b.c");
    assert_eq!(admin::update_role("u1", "USER").to_string(), "PUT /admin/users/u1/role?role=USER");
    assert_eq!(admin::count_users("ADMIN").to_string(), "GET /admin/users/count?role=ADMIN");
    assert_eq!(admin::count_files().path, "/admin/files/count");
    assert_eq!(admin::summary_report().path, "/admin/report/summary");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}
