use super::{CatalogItem, CatalogSection, IconId, Tint};

pub(super) static SECTIONS: &[CatalogSection] = &[
    CatalogSection {
        title: "Frontend Suite (Client-Side)",
        accent: Tint::Sky,
        items: FRONTEND,
    },
    CatalogSection {
        title: "Backend Suite (Server-Side Microservices)",
        accent: Tint::Emerald,
        items: BACKEND,
    },
    CatalogSection {
        title: "Data & Persistence Layer",
        accent: Tint::Purple,
        items: DATA,
    },
    CatalogSection {
        title: "Infrastructure & DevOps",
        accent: Tint::Orange,
        items: INFRA,
    },
];

const FRONTEND: &[CatalogItem] = &[
    CatalogItem {
        id: "webapp",
        title: "Web Application",
        subtitle: "TypeScript & Next.js",
        description: "TypeScript enforces static typing, drastically reducing runtime errors and improving code maintainability, a key tenet of modern software engineering. Next.js provides Server-Side Rendering (SSR) and Static Site Generation (SSG), which are critical for fast initial page loads and Search Engine Optimization (SEO) of artist profiles and tracks. The component-based architecture of React allows for reusable and testable UI elements.",
        icon: IconId::NextJs,
    },
    CatalogItem {
        id: "mobile",
        title: "Mobile Applications (iOS & Android)",
        subtitle: "Dart & Flutter",
        description: "Flutter enables the development of high-performance, natively compiled applications for mobile, web, and desktop from a single codebase. This significantly reduces development and maintenance time. Its reactive UI paradigm (similar to React) is well-suited for dynamic, data-driven interfaces. Dart's Ahead-of-Time (AOT) compilation provides performance that is virtually indistinguishable from native apps.",
        icon: IconId::Flutter,
    },
];

const BACKEND: &[CatalogItem] = &[
    CatalogItem {
        id: "core-api",
        title: "Core API & User Services",
        subtitle: "Go (Golang)",
        description: "Go is designed for high-concurrency and networking. Its lightweight concurrency model (goroutines and channels), based on the academic Communicating Sequential Processes (CSP) paradigm, is perfect for handling tens of thousands of simultaneous API requests for user data, track info, and community posts. It compiles to a single, small binary with no external dependencies, making it ideal for lean Docker containers.",
        icon: IconId::Go,
    },
    CatalogItem {
        id: "audio-processing",
        title: "Audio Processing & Streaming",
        subtitle: "Rust",
        description: "This service handles CPU-intensive tasks like audio transcoding (e.g., `.wav` to adaptive bitrate HLS/DASH streams), metadata extraction (BPM, key), and content fingerprinting. Rust provides C/C++ level performance with guaranteed memory safety through its novel Ownership and Borrowing model. This \"fearless concurrency\" prevents common bugs in systems programming, which is critical when processing user-uploaded media.",
        icon: IconId::Rust,
    },
    CatalogItem {
        id: "real-time-collab",
        title: "Real-time Collaboration & Messaging",
        subtitle: "Elixir",
        description: "The BEAM VM is a masterpiece of distributed, fault-tolerant systems design. Elixir leverages this foundation to build low-latency, massively concurrent applications. It is based on the Actor Model, where lightweight, isolated processes communicate via messages. This is the ideal paradigm for building the real-time chat, notifications, and collaborative workspace features of VerseFlow, ensuring high availability and responsiveness.",
        icon: IconId::Elixir,
    },
    CatalogItem {
        id: "data-science",
        title: "Data Science & Analytics",
        subtitle: "Python",
        description: "Python is the undisputed leader in data science and machine learning due to its extensive ecosystem of libraries like TensorFlow, PyTorch, scikit-learn, and Pandas. This service will run machine learning models for the \"FlowState\" recommendation engine (using collaborative filtering and deep learning on audio features), power the analytics dashboard, and identify breakout artists for the A&R Spotlight.",
        icon: IconId::Python,
    },
    CatalogItem {
        id: "ecommerce",
        title: "E-commerce & Payments",
        subtitle: "Kotlin / Java (Spring Boot)",
        description: "The Java Virtual Machine (JVM) ecosystem is mature, robust, and highly secure, making it a trusted choice for mission-critical financial applications. Spring Boot provides a battle-tested framework for building secure, transactional, and maintainable services. Kotlin, as a modern, statically typed language for the JVM, offers more concise syntax and enhanced safety features over traditional Java.",
        icon: IconId::Kotlin,
    },
];

const DATA: &[CatalogItem] = &[
    CatalogItem {
        id: "db-relational",
        title: "Primary Relational Database",
        subtitle: "PostgreSQL",
        description: "The source of truth for core structured data like user accounts, artist profiles, track metadata, and financial transactions. Its reliability, support for ACID transactions, and powerful features like JSONB columns make it a versatile foundation.",
        icon: IconId::Postgresql,
    },
    CatalogItem {
        id: "db-analytics",
        title: "Time-Series & Analytics Database",
        subtitle: "ClickHouse",
        description: "Powering the real-time artist analytics dashboard. ClickHouse is a columnar database (OLAP) designed to execute analytical queries on massive datasets with sub-second latency. It will store every stream, like, and listen event.",
        icon: IconId::Clickhouse,
    },
    CatalogItem {
        id: "db-search",
        title: "Search & Discovery Database",
        subtitle: "Elasticsearch",
        description: "Indexing all artists, tracks, and beats for fast, typo-tolerant full-text search. It will also be used to find collaborators in \"The Cypher\" based on skills and tags.",
        icon: IconId::Elasticsearch,
    },
    CatalogItem {
        id: "db-cache",
        title: "In-Memory Cache & Message Broker",
        subtitle: "Redis",
        description: "Caching frequently accessed data (e.g., user sessions, popular track info) to reduce load on PostgreSQL and for real-time messaging and task queues between microservices.",
        icon: IconId::Redis,
    },
];

const INFRA: &[CatalogItem] = &[
    CatalogItem {
        id: "infra-cloud",
        title: "Cloud Provider",
        subtitle: "GCP / AWS",
        description: "Leveraging a major cloud provider for scalable, reliable, and secure infrastructure on demand.",
        icon: IconId::Generic(Tint::Orange),
    },
    CatalogItem {
        id: "infra-container",
        title: "Containerization & Orchestration",
        subtitle: "Docker & Kubernetes",
        description: "Docker packages each microservice into a portable container. Kubernetes manages, scales, and ensures the resilience of the containerized services across a cluster of machines.",
        icon: IconId::Kubernetes,
    },
    CatalogItem {
        id: "infra-iac",
        title: "Infrastructure as Code (IaC)",
        subtitle: "Terraform",
        description: "All infrastructure (databases, Kubernetes clusters, storage buckets) is defined and managed through version-controlled code for repeatability, auditability, and automation.",
        icon: IconId::Terraform,
    },
    CatalogItem {
        id: "infra-ci-cd",
        title: "CI/CD Pipeline",
        subtitle: "GitHub Actions / GitLab CI",
        description: "Automates the testing, building, and deployment of code changes to the Kubernetes cluster, enabling rapid and reliable updates.",
        icon: IconId::Generic(Tint::Gray),
    },
];
