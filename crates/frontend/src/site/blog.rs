use leptos::prelude::*;

struct Post {
    title: &'static str,
    date: &'static str,
    summary: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Cinco hábitos para reducir el ausentismo a los turnos",
        date: "2024-05-20",
        summary: "Confirmar el día anterior y ofrecer horarios alternativos hace la diferencia.",
    },
    Post {
        title: "Receta digital: qué cambia para tu consultorio",
        date: "2024-04-08",
        summary: "Un repaso de la normativa vigente y cómo adaptarte sin complicaciones.",
    },
    Post {
        title: "Ordenar la base de pacientes en una tarde",
        date: "2024-03-15",
        summary: "Cómo migrar tu planilla de cálculo y no perder información en el camino.",
    },
];

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Blog"</h1>
            <div class="post-list">
                {POSTS
                    .iter()
                    .map(|post| view! {
                        <article class="post">
                            <time datetime=post.date>{crate::shared::date_utils::format_date(post.date)}</time>
                            <h3>{post.title}</h3>
                            <p>{post.summary}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
