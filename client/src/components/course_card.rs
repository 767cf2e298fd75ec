use leptos::prelude::*;

use crate::net::types::Course;

/// Dashboard tile for one course.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    view! {
        <div class="course-card" data-course-id=course.id>
            <div class="course-card__icon" aria-hidden="true">"📚"</div>
            <h3 class="course-card__name">{course.name}</h3>
            <p class="course-card__description">{course.description}</p>
            <button class="btn btn--primary course-card__start">"Comenzar Curso"</button>
        </div>
    }
}
